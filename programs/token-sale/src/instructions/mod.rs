pub mod activate;
pub mod cancel;
pub mod claim;
pub mod deposit;
pub mod distribute;
pub mod errors;
pub mod finalize;
pub mod init_participant;
pub mod initialize;
pub mod participate;
pub mod safeguard;

pub use activate::*;
pub use cancel::*;
pub use claim::*;
pub use deposit::*;
pub use distribute::*;
pub use errors::*;
pub use finalize::*;
pub use init_participant::*;
pub use initialize::*;
pub use participate::*;
pub use safeguard::*;
