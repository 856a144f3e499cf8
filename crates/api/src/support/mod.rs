#![forbid(unsafe_code)]

mod body;
mod config;
mod envelope;
mod logger;
mod routes;

pub(crate) use body::*;
pub(crate) use config::*;
pub(crate) use envelope::*;
pub(crate) use logger::*;
pub(crate) use routes::*;
