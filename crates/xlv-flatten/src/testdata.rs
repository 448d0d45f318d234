//! Shared response fixtures.

use serde_json::{json, Value};

/// An EscrowCreate lookup that debited the sender and created the escrow.
pub fn escrow_create() -> Value {
    json!({
        "result": {
            "close_time_iso": "2025-05-31T18:13:32Z",
            "hash": "B1A2C3",
            "ledger_hash": "L1E2D3",
            "ledger_index": 96112233,
            "validated": true,
            "tx_json": {
                "Account": "rAlice",
                "Amount": "1230000",
                "Destination": "rBob",
                "Fee": "12",
                "FinishAfter": 802030415,
                "Flags": 0,
                "Memos": [{"Memo": {"MemoType": "74657874", "MemoData": "68656C6C6F"}}],
                "Sequence": 7,
                "SigningPubKey": "ED01",
                "TransactionType": "EscrowCreate",
                "date": 802030412
            },
            "meta": {
                "TransactionIndex": 4,
                "TransactionResult": "tesSUCCESS",
                "AffectedNodes": [
                    {"ModifiedNode": {
                        "LedgerEntryType": "AccountRoot",
                        "LedgerIndex": "AA11",
                        "FinalFields": {
                            "Account": "rAlice",
                            "Balance": "98769988",
                            "OwnerCount": 1,
                            "Sequence": 8
                        },
                        "PreviousFields": {
                            "Balance": "100000000",
                            "OwnerCount": 0,
                            "Sequence": 7
                        }
                    }},
                    {"CreatedNode": {
                        "LedgerEntryType": "Escrow",
                        "LedgerIndex": "BB22",
                        "NewFields": {
                            "Account": "rAlice",
                            "Amount": "1230000",
                            "Destination": "rBob",
                            "FinishAfter": 802030415
                        }
                    }}
                ]
            }
        }
    })
}

