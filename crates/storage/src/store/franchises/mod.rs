#![forbid(unsafe_code)]

mod create;
mod delete;
mod detail;
mod list;
mod top_stock;
mod update;
