use clap::ValueEnum;
use harlog_core::har::{ProtocolRelative, ReaderOptions};

pub mod commands;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Build reader options from the global CLI flags
pub fn reader_options(legacy_protocol_relative: bool, no_validate: bool) -> ReaderOptions {
    let protocol_relative = if legacy_protocol_relative {
        ProtocolRelative::PrefixAuthority
    } else {
        ProtocolRelative::ResolveScheme
    };

    ReaderOptions::new()
        .protocol_relative(protocol_relative)
        .validate(!no_validate)
}
