//! Runtime configuration: command-line flags, then environment variables, then defaults.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clap::builder::TypedValueParser;

use crate::export::ExportScope;
use crate::store::UploadStore;
use crate::utils::default_store_path;
use crate::view::DEFAULT_PAGE_SIZE;

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Session store file (default: <data dir>/delivery-ledger/sessions.json)
    #[arg(long, global = true, env = "DELIVERY_LEDGER_STORE")]
    pub store: Option<PathBuf>,

    /// Rows per page in filtered views
    #[arg(
        long,
        global = true,
        env = "DELIVERY_LEDGER_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub page_size: usize,

    /// What an export covers: the current page or every filtered record
    #[arg(long, global = true, env = "DELIVERY_LEDGER_EXPORT_SCOPE", value_enum, default_value_t)]
    pub scope: ExportScope,

    /// Directory that receives filtered_data.json / filtered_data.csv
    #[arg(long, global = true, env = "DELIVERY_LEDGER_EXPORT_DIR", default_value = ".")]
    pub out: PathBuf,
}

/// Resolved settings
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub page_size: usize,
    pub export_scope: ExportScope,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_args(args: &ConfigArgs) -> Result<Self> {
        let store_path = match &args.store {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };

        Ok(Self {
            store_path,
            page_size: args.page_size.max(1),
            export_scope: args.scope,
            export_dir: args.out.clone(),
        })
    }

    pub fn upload_store(&self) -> UploadStore {
        UploadStore::new(&self.store_path)
    }
}
