//! Ledger entry types and their field layouts.

use std::fmt;

use crate::field::FieldKind::{self, *};
use crate::field::FieldSpec;

const fn f(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::new(name, kind)
}

/// A ledger entry shape, keyed by its `LedgerEntryType` tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LedgerEntryType {
    AccountRoot,
    Amm,
    Check,
    DepositPreauth,
    DirectoryNode,
    Escrow,
    NfTokenPage,
    Offer,
    PayChannel,
    RippleState,
    SignerList,
    Ticket,
    /// An NFT as listed by `account_nfts`.
    Nft,
    /// An offer as listed by `account_offers`.
    AccountOffer,
    /// A trust line as listed by `account_lines`.
    AccountLine,
    /// A payment channel as listed by `account_channels`.
    AccountChannel,
    /// Any tag without a registered schema.
    Unknown(String),
}

impl LedgerEntryType {
    /// Every registered (non-`Unknown`) entry type.
    pub const KNOWN: &'static [LedgerEntryType] = &[
        Self::AccountRoot,
        Self::Amm,
        Self::Check,
        Self::DepositPreauth,
        Self::DirectoryNode,
        Self::Escrow,
        Self::NfTokenPage,
        Self::Offer,
        Self::PayChannel,
        Self::RippleState,
        Self::SignerList,
        Self::Ticket,
        Self::Nft,
        Self::AccountOffer,
        Self::AccountLine,
        Self::AccountChannel,
    ];

    /// Parse a tag. Unrecognised tags become [`LedgerEntryType::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "AccountRoot" => Self::AccountRoot,
            "AMM" => Self::Amm,
            "Check" => Self::Check,
            "DepositPreauth" => Self::DepositPreauth,
            "DirectoryNode" => Self::DirectoryNode,
            "Escrow" => Self::Escrow,
            "NFTokenPage" => Self::NfTokenPage,
            "Offer" => Self::Offer,
            "PayChannel" => Self::PayChannel,
            "RippleState" => Self::RippleState,
            "SignerList" => Self::SignerList,
            "Ticket" => Self::Ticket,
            "NFT" => Self::Nft,
            "Offers" => Self::AccountOffer,
            "Lines" => Self::AccountLine,
            "Channels" => Self::AccountChannel,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tag string.
    pub fn tag(&self) -> &str {
        match self {
            Self::AccountRoot => "AccountRoot",
            Self::Amm => "AMM",
            Self::Check => "Check",
            Self::DepositPreauth => "DepositPreauth",
            Self::DirectoryNode => "DirectoryNode",
            Self::Escrow => "Escrow",
            Self::NfTokenPage => "NFTokenPage",
            Self::Offer => "Offer",
            Self::PayChannel => "PayChannel",
            Self::RippleState => "RippleState",
            Self::SignerList => "SignerList",
            Self::Ticket => "Ticket",
            Self::Nft => "NFT",
            Self::AccountOffer => "Offers",
            Self::AccountLine => "Lines",
            Self::AccountChannel => "Channels",
            Self::Unknown(tag) => tag,
        }
    }

    /// Singular and plural display labels, or `None` for unknown tags.
    pub fn labels(&self) -> Option<(&'static str, &'static str)> {
        let labels = match self {
            Self::AccountRoot => ("Account Root", "Account Roots"),
            Self::Amm => ("AMM", "AMMs"),
            Self::Check => ("Check", "Checks"),
            Self::DepositPreauth => ("Deposit Preauthorization", "Deposit Preauthorizations"),
            Self::DirectoryNode => ("Directory Node", "Directory Nodes"),
            Self::Escrow => ("Escrow", "Escrows"),
            Self::NfTokenPage => ("NFT Page", "NFT Pages"),
            Self::Offer | Self::AccountOffer => ("Offer", "Offers"),
            Self::PayChannel | Self::AccountChannel => ("Payment Channel", "Payment Channels"),
            Self::RippleState | Self::AccountLine => ("Trust Line", "Trust Lines"),
            Self::SignerList => ("Signer List", "Signer Lists"),
            Self::Ticket => ("Ticket", "Tickets"),
            Self::Nft => ("NFT", "NFTs"),
            Self::Unknown(_) => return None,
        };
        Some(labels)
    }

    /// Ordered field layout, or `None` for unknown tags.
    pub fn fields(&self) -> Option<&'static [FieldSpec]> {
        let fields = match self {
            Self::AccountRoot => ACCOUNT_ROOT,
            Self::Amm => AMM,
            Self::Check => CHECK,
            Self::DepositPreauth => DEPOSIT_PREAUTH,
            Self::DirectoryNode => DIRECTORY_NODE,
            Self::Escrow => ESCROW,
            Self::NfTokenPage => NFTOKEN_PAGE,
            Self::Offer => OFFER,
            Self::PayChannel => PAY_CHANNEL,
            Self::RippleState => RIPPLE_STATE,
            Self::SignerList => SIGNER_LIST,
            Self::Ticket => TICKET,
            Self::Nft => NFT,
            Self::AccountOffer => ACCOUNT_OFFER,
            Self::AccountLine => ACCOUNT_LINE,
            Self::AccountChannel => ACCOUNT_CHANNEL,
            Self::Unknown(_) => return None,
        };
        Some(fields)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

const ACCOUNT_ROOT: &[FieldSpec] = &[
    f("Account", Text),
    f("Balance", Amount),
    f("Sequence", Text),
    f("OwnerCount", Text),
    f("Flags", Text),
    f("Domain", Hex),
    f("EmailHash", Text),
    f("MessageKey", Text),
    f("RegularKey", Text),
    f("TransferRate", Text),
    f("TickSize", Text),
    f("AccountTxnID", Text),
    f("MintedNFTokens", Text),
    f("BurnedNFTokens", Text),
    f("NFTokenMinter", Text),
    f("AMMID", Text),
    f("PreviousTxnID", Text),
    f("PreviousTxnLgrSeq", Text),
    f("index", Text),
];

const AMM: &[FieldSpec] = &[
    f("Account", Text),
    f("Asset", Nested),
    f("Asset2", Nested),
    f("LPTokenBalance", Amount),
    f("TradingFee", Text),
    f("AuctionSlot", Nested),
    f("VoteSlots", List),
    f("Flags", Text),
    f("index", Text),
];

const CHECK: &[FieldSpec] = &[
    f("Account", Text),
    f("Destination", Text),
    f("SendMax", Amount),
    f("Sequence", Text),
    f("Expiration", RippleTime),
    f("InvoiceID", Text),
    f("DestinationTag", Text),
    f("SourceTag", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("index", Text),
];

const DEPOSIT_PREAUTH: &[FieldSpec] = &[
    f("Account", Text),
    f("Authorize", Text),
    f("AuthorizeCredentials", List),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("index", Text),
];

const DIRECTORY_NODE: &[FieldSpec] = &[
    f("Owner", Text),
    f("RootIndex", Text),
    f("Indexes", List),
    f("IndexNext", Text),
    f("IndexPrevious", Text),
    f("TakerPaysCurrency", Currency),
    f("TakerPaysIssuer", Text),
    f("TakerGetsCurrency", Currency),
    f("TakerGetsIssuer", Text),
    f("ExchangeRate", Text),
    f("NFTokenID", Text),
    f("Flags", Text),
    f("index", Text),
];

const ESCROW: &[FieldSpec] = &[
    f("Account", Text),
    f("Destination", Text),
    f("Amount", Amount),
    f("Condition", Text),
    f("CancelAfter", RippleTime),
    f("FinishAfter", RippleTime),
    f("DestinationTag", Text),
    f("SourceTag", Text),
    f("DestinationNode", Text),
    f("OwnerNode", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("PreviousTxnLgrSeq", Text),
    f("index", Text),
];

const NFTOKEN_PAGE: &[FieldSpec] = &[
    f("NFTokens", List),
    f("NextPageMin", Text),
    f("PreviousPageMin", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("PreviousTxnLgrSeq", Text),
    f("index", Text),
];

const OFFER: &[FieldSpec] = &[
    f("Account", Text),
    f("TakerPays", Amount),
    f("TakerGets", Amount),
    f("Sequence", Text),
    f("Expiration", RippleTime),
    f("BookDirectory", Text),
    f("BookNode", Text),
    f("OwnerNode", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("PreviousTxnLgrSeq", Text),
    f("index", Text),
];

const PAY_CHANNEL: &[FieldSpec] = &[
    f("Account", Text),
    f("Destination", Text),
    f("Amount", Amount),
    f("Balance", Amount),
    f("PublicKey", Text),
    f("SettleDelay", Text),
    f("Expiration", RippleTime),
    f("CancelAfter", RippleTime),
    f("DestinationTag", Text),
    f("SourceTag", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("index", Text),
];

const RIPPLE_STATE: &[FieldSpec] = &[
    f("Balance", Amount),
    f("HighLimit", Amount),
    f("LowLimit", Amount),
    f("HighNode", Text),
    f("LowNode", Text),
    f("HighQualityIn", Text),
    f("HighQualityOut", Text),
    f("LowQualityIn", Text),
    f("LowQualityOut", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("PreviousTxnLgrSeq", Text),
    f("index", Text),
];

const SIGNER_LIST: &[FieldSpec] = &[
    f("SignerQuorum", Text),
    f("SignerEntries", List),
    f("SignerListID", Text),
    f("OwnerNode", Text),
    f("Flags", Text),
    f("PreviousTxnID", Text),
    f("index", Text),
];

const TICKET: &[FieldSpec] = &[
    f("Account", Text),
    f("TicketSequence", Text),
    f("Flags", NftFlags),
    f("OwnerNode", Text),
    f("PreviousTxnID", Text),
    f("index", Text),
];

const NFT: &[FieldSpec] = &[
    f("NFTokenID", Text),
    f("Issuer", Text),
    f("NFTokenTaxon", Text),
    f("URI", Hex),
    f("Flags", NftFlags),
    f("TransferFee", Text),
    f("nft_serial", Text),
];

const ACCOUNT_OFFER: &[FieldSpec] = &[
    f("seq", Text),
    f("taker_pays", Amount),
    f("taker_gets", Amount),
    f("quality", Text),
    f("expiration", RippleTime),
    f("flags", Text),
];

const ACCOUNT_LINE: &[FieldSpec] = &[
    f("account", Text),
    f("currency", Currency),
    f("balance", Text),
    f("limit", Text),
    f("limit_peer", Text),
    f("quality_in", Text),
    f("quality_out", Text),
    f("no_ripple", Text),
    f("no_ripple_peer", Text),
    f("authorized", Text),
    f("peer_authorized", Text),
    f("freeze", Text),
    f("freeze_peer", Text),
];

const ACCOUNT_CHANNEL: &[FieldSpec] = &[
    f("channel_id", Text),
    f("account", Text),
    f("destination_account", Text),
    f("amount", Amount),
    f("balance", Amount),
    f("settle_delay", Text),
    f("public_key", Text),
    f("public_key_hex", Text),
    f("expiration", RippleTime),
    f("cancel_after", RippleTime),
    f("source_tag", Text),
    f("destination_tag", Text),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_roundtrip() {
        for entry in LedgerEntryType::KNOWN {
            assert_eq!(&LedgerEntryType::from_tag(entry.tag()), entry);
        }
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let entry = LedgerEntryType::from_tag("Oracle");
        assert!(entry.is_unknown());
        assert_eq!(entry.tag(), "Oracle");
        assert!(entry.fields().is_none());
        assert!(entry.labels().is_none());
    }

    #[test]
    fn every_known_type_has_layout_and_labels() {
        for entry in LedgerEntryType::KNOWN {
            let fields = entry.fields().unwrap();
            assert!(!fields.is_empty(), "{entry}");
            let names: HashSet<_> = fields.iter().map(|f| &*f.name).collect();
            assert_eq!(names.len(), fields.len(), "duplicate field in {entry}");
            assert!(entry.labels().is_some());
        }
    }

    #[test]
    fn amount_and_time_fields_are_typed() {
        let escrow = LedgerEntryType::Escrow.fields().unwrap();
        let kind = |name: &str| escrow.iter().find(|f| f.name == name).map(|f| f.kind);
        assert_eq!(kind("Amount"), Some(FieldKind::Amount));
        assert_eq!(kind("FinishAfter"), Some(FieldKind::RippleTime));
        assert_eq!(kind("Condition"), Some(FieldKind::Text));
    }

    #[test]
    fn nft_and_ticket_flags_are_bitmasks() {
        for entry in [LedgerEntryType::Nft, LedgerEntryType::Ticket] {
            let flags = entry.fields().unwrap().iter().find(|f| f.name == "Flags").unwrap();
            assert_eq!(flags.kind, FieldKind::NftFlags);
        }
    }
}
