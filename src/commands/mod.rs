//! One module per verb family. Every handler takes the request context and
//! its own clap `Args` struct, and reports what it did in the classic
//! `TODO: ...` voice.

pub mod add;
pub mod del;
pub mod done;
pub mod edit;
pub mod list;
pub mod mv;
pub mod report;
