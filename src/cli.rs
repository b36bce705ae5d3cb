// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use crate::config::options::{ExportOptions, PageOptions};
use crate::price::{self, PriceInfo, PriceRule};

#[derive(Parser, Debug)]
#[command(name = "menu_page", version, about = "Build a mobile ordering page from a weekly product sheet")]
pub struct Cli {
    /// More detail in .store/debug.log (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a CSV/TSV product sheet into a single HTML page
    Convert(ConvertArgs),
    /// Show how price cells are interpreted (one JSON line per cell)
    Price {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Product sheet (.csv, or .tsv for tab separated)
    pub input: PathBuf,

    /// Output file, or a directory ending in '/'. Defaults to the input name with .html
    #[arg(short, long)]
    pub out: Option<String>,

    /// Shop name used in the title and the order e-mail greeting
    #[arg(long)]
    pub shop: Option<String>,

    /// Address the checkout e-mail is sent to
    #[arg(long)]
    pub email: Option<String>,

    /// Page title (default: "<shop> Order")
    #[arg(long)]
    pub title: Option<String>,
}

impl ConvertArgs {
    pub fn page_options(&self) -> PageOptions {
        let mut opts = PageOptions::default();
        if let Some(shop) = &self.shop { opts.shop_name = shop.clone(); }
        if let Some(email) = &self.email { opts.order_email = email.clone(); }
        opts.page_title = self.title.clone();
        opts
    }

    pub fn export_options(&self) -> ExportOptions {
        match &self.out {
            Some(text) => {
                let mut export = ExportOptions::default();
                export.set_path(text);
                export
            }
            None => ExportOptions::beside_input(&self.input),
        }
    }
}

#[derive(Serialize)]
struct PriceLine<'a> {
    text: &'a str,
    rule: PriceRule,
    #[serde(flatten)]
    price: PriceInfo,
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _guard = crate::log::init(level_for(cli.verbose));

    match cli.command {
        Command::Convert(args) => {
            let page = args.page_options();
            let export = args.export_options();
            let summary = crate::convert::convert_file(&args.input, &export, &page)
                .wrap_err_with(|| format!("converting {}", args.input.display()))?;

            let st = summary.stats;
            println!(
                "Wrote {} ({} sections, {} items, {} orderable)",
                summary.output.display(), st.sections, st.items, st.priced
            );
        }
        Command::Price { text } => {
            for cell in &text {
                let (rule, price) = price::interpret_with_rule(cell);
                logd!("CLI: price {cell:?} → {} {price:?}", rule.label());
                let line = PriceLine { text: cell, rule, price };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }
    Ok(())
}
