//! Code sets used by the message models
//!
//! Each set is an open newtype over text with the known codes as constants.
//! Unknown codes are carried through unchanged; [`is_known`](ReportType::is_known)
//! tells them apart.

use crate::value::{Leaf, Value};
use crate::error::AccessError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $konst:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $konst: $name = $name(Cow::Borrowed($code));
            )+

            /// Every known code
            pub const ALL: &'static [$name] = &[$(Self::$konst),+];

            /// Code text
            pub fn code(&self) -> &str {
                &self.0
            }

            /// Whether the code is in the set
            pub fn is_known(&self) -> bool {
                Self::ALL.contains(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(Cow::Owned(code.to_string()))
            }
        }

        impl Leaf for $name {
            fn to_value(&self) -> Value {
                Value::Text(self.0.to_string())
            }

            fn from_value(value: Value) -> Result<Self, AccessError> {
                Ok(Self(Cow::Owned(value.into_text())))
            }

            fn is_zero(&self) -> bool {
                self.0.is_empty()
            }
        }

        leaf_node!($name);
    };
}

code_set!(
    /// Report requested by an account reporting request
    CamtReportType {
        /// Account balance report
        ACCOUNT_BALANCE_REPORT = "ABAR",
        /// Activity report
        ACTIVITY_REPORT = "ACTR",
        /// Endpoint details received report
        ENDPOINT_DETAILS_RECEIVED = "DTLR",
        /// Endpoint details sent report
        ENDPOINT_DETAILS_SENT = "DTLS",
        /// Endpoint gap report
        ENDPOINT_GAP_REPORT = "GAPR",
        /// Endpoint totals report
        ENDPOINT_TOTALS_REPORT = "ETOT",
    }
);

code_set!(
    /// Report period
    ReportType {
        /// End of day
        EVERY_DAY = "EDAY",
        /// Intraday
        INTRADAY = "IDAY",
    }
);

code_set!(
    /// Entry status
    ReportStatus {
        /// Booked
        BOOK = "BOOK",
        /// Pending
        PENDING = "PDNG",
        /// Received
        RECEIVED = "RCVD",
        /// Settled
        SETTLED = "SETT",
    }
);

code_set!(
    /// Credit or debit
    CdtDbtInd {
        /// Credit
        CREDIT = "CRDT",
        /// Debit
        DEBIT = "DBIT",
    }
);

code_set!(
    /// Related date type
    WorkingDayType {
        /// Business processing date
        BUSINESS_PROCESSING_DATE = "BPRD",
    }
);

code_set!(
    /// Clearing system of an agent
    PaymentSystemType {
        /// ABA routing number
        USABA = "USABA",
        /// CHIPS
        CHIPS = "CHIPS",
        /// SEPA
        SEPA = "SEPA",
        /// Real-time gross settlement
        RTGS = "RTGS",
        /// SWIFT
        SWIFT = "SWIFT",
        /// BACS
        BACS = "BACS",
    }
);

code_set!(
    /// Account type
    AccountTypeFrs {
        /// Savings account
        SAVINGS = "S",
        /// Merchant account
        MERCHANT = "M",
    }
);

code_set!(
    /// Local instrument
    InstrumentPropCodeType {
        /// Credit transfer
        CTRC = "CTRC",
        /// Direct debit
        DD = "DD",
        /// Straight through processing
        STP = "STP",
        /// National credit transfer
        NCT = "NCT",
        /// Customer transfer
        CTRD = "CTRD",
    }
);

code_set!(
    /// Transaction status or bank transaction code
    TransactionStatusCode {
        /// In process
        MESSAGES_IN_PROCESS = "INPR",
        /// Intercepted
        MESSAGES_INTERCEPTED = "ICPT",
        /// Accepted technical validation
        ACCEPTED_TECHNICAL_VALIDATION = "ACTC",
        /// Accepted settlement in process
        ACCEPTED_SETTLEMENT_IN_PROCESS = "ACSP",
        /// Accepted with change
        ACCEPTED_WITH_CHANGE = "ACWC",
        /// Accepted credit clearing
        ACCEPTED_CREDIT_CLEARING = "ACCC",
        /// Accepted settlement completed
        ACCEPTED_SETTLEMENT_COMPLETED = "ACSC",
        /// Sent
        SENT = "SENT",
        /// Received
        RECEIVED = "RCVD",
        /// Rejected
        REJECTED = "RJCT",
        /// Pending
        PENDING = "PDNG",
        /// Cancelled
        CANCELLED = "CANC",
        /// Accepted customer profile
        ACCEPTED_CUSTOMER_PROFILE = "ACCP",
        /// Partially accepted
        PARTIALLY_ACCEPTED = "PART",
        /// Credit
        CREDIT = "CRDT",
        /// Debit
        DEBIT = "DBIT",
    }
);
