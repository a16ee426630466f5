#![allow(ambiguous_glob_reexports)]

pub mod get_balance;
pub mod initialize_ledger;
pub mod register_recipient;
pub mod split;
pub mod withdraw;
pub mod withdraw_remainder;

pub use get_balance::*;
pub use initialize_ledger::*;
pub use register_recipient::*;
pub use split::*;
pub use withdraw::*;
pub use withdraw_remainder::*;
