//! Help sources — the structural and external acquisition strategies.

pub mod external;
pub mod structural;
