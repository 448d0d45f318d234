//! Transaction types and their field layouts.
//!
//! A transaction envelope is rendered as the type-specific fields followed
//! by the fields every transaction shares. Fields whose kind is nested are
//! shown as sub-sections instead of inline lines.

use std::fmt;

use crate::field::FieldKind::{self, *};
use crate::field::FieldSpec;

const fn f(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::new(name, kind)
}

macro_rules! transaction_types {
    ($($variant:ident => $fields:ident),+ $(,)?) => {
        /// A transaction type, keyed by its `TransactionType` tag.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum TransactionType {
            $($variant,)+
            /// Any tag without a registered layout.
            Unknown(String),
        }

        impl TransactionType {
            /// Every registered (non-`Unknown`) transaction type.
            pub const KNOWN: &'static [TransactionType] = &[$(Self::$variant,)+];

            /// Parse a tag. Unrecognised tags become [`TransactionType::Unknown`].
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $(stringify!($variant) => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }

            /// The tag string.
            pub fn tag(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Unknown(tag) => tag,
                }
            }

            /// Type-specific fields, in display order.
            pub fn specific_fields(&self) -> &'static [FieldSpec] {
                match self {
                    $(Self::$variant => $fields,)+
                    Self::Unknown(_) => &[],
                }
            }
        }
    };
}

transaction_types! {
    Payment => PAYMENT,
    OfferCreate => OFFER_CREATE,
    OfferCancel => OFFER_CANCEL,
    TrustSet => TRUST_SET,
    AccountSet => ACCOUNT_SET,
    AccountDelete => ACCOUNT_DELETE,
    SetRegularKey => SET_REGULAR_KEY,
    SignerListSet => SIGNER_LIST_SET,
    EscrowCreate => ESCROW_CREATE,
    EscrowFinish => ESCROW_FINISH,
    EscrowCancel => ESCROW_CANCEL,
    PaymentChannelCreate => PAYMENT_CHANNEL_CREATE,
    PaymentChannelFund => PAYMENT_CHANNEL_FUND,
    PaymentChannelClaim => PAYMENT_CHANNEL_CLAIM,
    CheckCreate => CHECK_CREATE,
    CheckCash => CHECK_CASH,
    CheckCancel => CHECK_CANCEL,
    DepositPreauth => DEPOSIT_PREAUTH,
    TicketCreate => TICKET_CREATE,
    NFTokenMint => NFTOKEN_MINT,
    NFTokenBurn => NFTOKEN_BURN,
    NFTokenModify => NFTOKEN_MODIFY,
    NFTokenCreateOffer => NFTOKEN_CREATE_OFFER,
    NFTokenCancelOffer => NFTOKEN_CANCEL_OFFER,
    NFTokenAcceptOffer => NFTOKEN_ACCEPT_OFFER,
    AMMCreate => AMM_CREATE,
    AMMDeposit => AMM_DEPOSIT,
    AMMWithdraw => AMM_WITHDRAW,
    AMMVote => AMM_VOTE,
    AMMBid => AMM_BID,
    AMMDelete => AMM_DELETE,
    AMMClawback => AMM_CLAWBACK,
    Clawback => CLAWBACK,
    DIDSet => DID_SET,
    DIDDelete => NO_FIELDS,
    OracleSet => ORACLE_SET,
    OracleDelete => ORACLE_DELETE,
    MPTokenIssuanceCreate => MPTOKEN_ISSUANCE_CREATE,
    MPTokenIssuanceDestroy => MPTOKEN_ISSUANCE_DESTROY,
    MPTokenIssuanceSet => MPTOKEN_HOLDER,
    MPTokenAuthorize => MPTOKEN_HOLDER,
    CredentialCreate => CREDENTIAL_CREATE,
    CredentialAccept => CREDENTIAL_ACCEPT,
    CredentialDelete => CREDENTIAL_DELETE,
}

impl TransactionType {
    /// Full layout: `TransactionType` and `Account`, the type-specific
    /// fields, then the remaining common fields.
    pub fn fields(&self) -> Vec<FieldSpec> {
        let (head, tail) = COMMON_FIELDS.split_at(2);
        head.iter()
            .chain(self.specific_fields())
            .chain(tail)
            .cloned()
            .collect()
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fields shared by every transaction. The first two lead the layout.
pub const COMMON_FIELDS: &[FieldSpec] = &[
    f("TransactionType", Text),
    f("Account", Text),
    f("Fee", Amount),
    f("Sequence", Text),
    f("TicketSequence", Text),
    f("Flags", Text),
    f("LastLedgerSequence", Text),
    f("SourceTag", Text),
    f("NetworkID", Text),
    f("AccountTxnID", Text),
    f("SigningPubKey", Text),
    f("TxnSignature", Text),
    f("Signers", List),
    f("Memos", Memos),
    f("date", RippleTime),
    f("ctid", Text),
    f("inLedger", Text),
];

const NO_FIELDS: &[FieldSpec] = &[];

const PAYMENT: &[FieldSpec] = &[
    f("Destination", Text),
    f("DestinationTag", Text),
    f("Amount", Amount),
    f("DeliverMax", Amount),
    f("SendMax", Amount),
    f("DeliverMin", Amount),
    f("InvoiceID", Text),
    f("Paths", List),
    f("CredentialIDs", List),
];

const OFFER_CREATE: &[FieldSpec] = &[
    f("TakerPays", Amount),
    f("TakerGets", Amount),
    f("Expiration", RippleTime),
    f("OfferSequence", Text),
];

const OFFER_CANCEL: &[FieldSpec] = &[f("OfferSequence", Text)];

const TRUST_SET: &[FieldSpec] = &[
    f("LimitAmount", Amount),
    f("QualityIn", Text),
    f("QualityOut", Text),
];

const ACCOUNT_SET: &[FieldSpec] = &[
    f("SetFlag", Text),
    f("ClearFlag", Text),
    f("Domain", Hex),
    f("EmailHash", Text),
    f("MessageKey", Text),
    f("TransferRate", Text),
    f("TickSize", Text),
    f("NFTokenMinter", Text),
];

const ACCOUNT_DELETE: &[FieldSpec] = &[
    f("Destination", Text),
    f("DestinationTag", Text),
    f("CredentialIDs", List),
];

const SET_REGULAR_KEY: &[FieldSpec] = &[f("RegularKey", Text)];

const SIGNER_LIST_SET: &[FieldSpec] = &[f("SignerQuorum", Text), f("SignerEntries", List)];

const ESCROW_CREATE: &[FieldSpec] = &[
    f("Destination", Text),
    f("DestinationTag", Text),
    f("Amount", Amount),
    f("Condition", Text),
    f("CancelAfter", RippleTime),
    f("FinishAfter", RippleTime),
];

const ESCROW_FINISH: &[FieldSpec] = &[
    f("Owner", Text),
    f("OfferSequence", Text),
    f("Condition", Text),
    f("Fulfillment", Text),
    f("CredentialIDs", List),
];

const ESCROW_CANCEL: &[FieldSpec] = &[f("Owner", Text), f("OfferSequence", Text)];

const PAYMENT_CHANNEL_CREATE: &[FieldSpec] = &[
    f("Destination", Text),
    f("DestinationTag", Text),
    f("Amount", Amount),
    f("SettleDelay", Text),
    f("PublicKey", Text),
    f("CancelAfter", RippleTime),
];

const PAYMENT_CHANNEL_FUND: &[FieldSpec] = &[
    f("Channel", Text),
    f("Amount", Amount),
    f("Expiration", RippleTime),
];

const PAYMENT_CHANNEL_CLAIM: &[FieldSpec] = &[
    f("Channel", Text),
    f("Balance", Amount),
    f("Amount", Amount),
    f("Signature", Text),
    f("PublicKey", Text),
];

const CHECK_CREATE: &[FieldSpec] = &[
    f("Destination", Text),
    f("DestinationTag", Text),
    f("SendMax", Amount),
    f("Expiration", RippleTime),
    f("InvoiceID", Text),
];

const CHECK_CASH: &[FieldSpec] = &[
    f("CheckID", Text),
    f("Amount", Amount),
    f("DeliverMin", Amount),
];

const CHECK_CANCEL: &[FieldSpec] = &[f("CheckID", Text)];

const DEPOSIT_PREAUTH: &[FieldSpec] = &[
    f("Authorize", Text),
    f("Unauthorize", Text),
    f("AuthorizeCredentials", List),
    f("UnauthorizeCredentials", List),
];

const TICKET_CREATE: &[FieldSpec] = &[f("TicketCount", Text)];

const NFTOKEN_MINT: &[FieldSpec] = &[
    f("NFTokenTaxon", Text),
    f("Issuer", Text),
    f("TransferFee", Text),
    f("URI", Hex),
    f("Amount", Amount),
    f("Destination", Text),
    f("Expiration", RippleTime),
];

const NFTOKEN_BURN: &[FieldSpec] = &[f("NFTokenID", Text), f("Owner", Text)];

const NFTOKEN_MODIFY: &[FieldSpec] = &[f("NFTokenID", Text), f("Owner", Text), f("URI", Hex)];

const NFTOKEN_CREATE_OFFER: &[FieldSpec] = &[
    f("NFTokenID", Text),
    f("Amount", Amount),
    f("Owner", Text),
    f("Destination", Text),
    f("Expiration", RippleTime),
];

const NFTOKEN_CANCEL_OFFER: &[FieldSpec] = &[f("NFTokenOffers", List)];

const NFTOKEN_ACCEPT_OFFER: &[FieldSpec] = &[
    f("NFTokenSellOffer", Text),
    f("NFTokenBuyOffer", Text),
    f("NFTokenBrokerFee", Amount),
];

const AMM_CREATE: &[FieldSpec] = &[
    f("Amount", Amount),
    f("Amount2", Amount),
    f("TradingFee", Text),
];

const AMM_DEPOSIT: &[FieldSpec] = &[
    f("Asset", Nested),
    f("Asset2", Nested),
    f("Amount", Amount),
    f("Amount2", Amount),
    f("EPrice", Amount),
    f("LPTokenOut", Amount),
    f("TradingFee", Text),
];

const AMM_WITHDRAW: &[FieldSpec] = &[
    f("Asset", Nested),
    f("Asset2", Nested),
    f("Amount", Amount),
    f("Amount2", Amount),
    f("EPrice", Amount),
    f("LPTokenIn", Amount),
];

const AMM_VOTE: &[FieldSpec] = &[
    f("Asset", Nested),
    f("Asset2", Nested),
    f("TradingFee", Text),
];

const AMM_BID: &[FieldSpec] = &[
    f("Asset", Nested),
    f("Asset2", Nested),
    f("BidMin", Amount),
    f("BidMax", Amount),
    f("AuthAccounts", List),
];

const AMM_DELETE: &[FieldSpec] = &[f("Asset", Nested), f("Asset2", Nested)];

const AMM_CLAWBACK: &[FieldSpec] = &[
    f("Holder", Text),
    f("Asset", Nested),
    f("Asset2", Nested),
    f("Amount", Amount),
];

const CLAWBACK: &[FieldSpec] = &[f("Amount", Amount), f("Holder", Text)];

const DID_SET: &[FieldSpec] = &[
    f("DIDDocument", Hex),
    f("URI", Hex),
    f("Data", Hex),
];

const ORACLE_SET: &[FieldSpec] = &[
    f("OracleDocumentID", Text),
    f("Provider", Hex),
    f("URI", Hex),
    f("AssetClass", Hex),
    f("LastUpdateTime", Text),
    f("PriceDataSeries", List),
];

const ORACLE_DELETE: &[FieldSpec] = &[f("OracleDocumentID", Text)];

const MPTOKEN_ISSUANCE_CREATE: &[FieldSpec] = &[
    f("AssetScale", Text),
    f("MaximumAmount", Text),
    f("TransferFee", Text),
    f("MPTokenMetadata", Hex),
];

const MPTOKEN_ISSUANCE_DESTROY: &[FieldSpec] = &[f("MPTokenIssuanceID", Text)];

const MPTOKEN_HOLDER: &[FieldSpec] = &[f("MPTokenIssuanceID", Text), f("Holder", Text)];

const CREDENTIAL_CREATE: &[FieldSpec] = &[
    f("Subject", Text),
    f("CredentialType", Hex),
    f("Expiration", RippleTime),
    f("URI", Hex),
];

const CREDENTIAL_ACCEPT: &[FieldSpec] = &[f("Issuer", Text), f("CredentialType", Hex)];

const CREDENTIAL_DELETE: &[FieldSpec] = &[
    f("Subject", Text),
    f("Issuer", Text),
    f("CredentialType", Hex),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn more_than_thirty_types() {
        assert!(TransactionType::KNOWN.len() > 30);
    }

    #[test]
    fn tags_roundtrip() {
        for tx in TransactionType::KNOWN {
            assert_eq!(&TransactionType::from_tag(tx.tag()), tx);
        }
        assert_eq!(TransactionType::from_tag("AMMBid").tag(), "AMMBid");
    }

    #[test]
    fn unknown_type_keeps_common_fields() {
        let tx = TransactionType::from_tag("XChainCommit");
        assert!(tx.is_unknown());
        assert_eq!(tx.fields().len(), COMMON_FIELDS.len());
    }

    #[test]
    fn layout_leads_with_type_and_account() {
        let fields = TransactionType::EscrowCreate.fields();
        let names: Vec<_> = fields.iter().map(|f| &*f.name).collect();
        assert_eq!(&names[..3], &["TransactionType", "Account", "Destination"]);
        assert!(names.contains(&"FinishAfter"));
        assert!(names.contains(&"Fee"));
    }

    #[test]
    fn layouts_have_no_duplicates() {
        for tx in TransactionType::KNOWN {
            let fields = tx.fields();
            let names: HashSet<_> = fields.iter().map(|f| f.name.clone()).collect();
            assert_eq!(names.len(), fields.len(), "duplicate field in {tx}");
        }
    }
}
