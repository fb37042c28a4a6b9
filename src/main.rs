//! dlprobe CLI entry point.

mod cli;

use clap::Parser;
use cli::{CharsetArg, Cli, Command, KindArg};
use dlprobe::{harness, surface};
use dlprobe_mangle::{CType, Charset, FuncKind, FuncSig, MsvcMangler, ScopedName};
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;
use target_lexicon::Triple;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Mangle {
            name,
            kind,
            params,
            ret,
            charset,
            target,
        } => run_mangle(&name, kind, &params, &ret, charset, &target),
        Command::Exports { json } => run_exports(json),
        Command::Check { library } => run_check(&library),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .compact()
        .init();
}

fn run_mangle(
    name: &str,
    kind: KindArg,
    params: &[String],
    ret: &str,
    charset: CharsetArg,
    target: &str,
) -> Result<(), Box<dyn Error>> {
    let triple = Triple::from_str(target).map_err(|e| format!("invalid target triple: {e}"))?;
    let mangler = MsvcMangler::for_triple(&triple)?;

    let name = ScopedName::parse(name)
        .ok_or_else(|| format!("declaration name must be non-empty, got {name:?}"))?;
    let kind = match kind {
        KindArg::Free => FuncKind::Free,
        KindArg::Static => FuncKind::Static,
        KindArg::Instance => FuncKind::Instance { is_const: false },
        KindArg::ConstInstance => FuncKind::Instance { is_const: true },
    };
    let params = params
        .iter()
        .map(|p| CType::from_str(p))
        .collect::<Result<Vec<_>, _>>()?;
    let ret = CType::from_str(ret)?;
    let charset = match charset {
        CharsetArg::Ansi => Charset::Ansi,
        CharsetArg::Unicode => Charset::Unicode,
    };

    let sig = FuncSig {
        name,
        kind,
        params,
        ret,
        charset,
    };
    println!("{}", mangler.mangle(&sig)?);
    Ok(())
}

#[derive(Serialize)]
struct ExportRow {
    label: &'static str,
    symbol: String,
    linkage: &'static str,
}

fn run_exports(json: bool) -> Result<(), Box<dyn Error>> {
    let mangler = MsvcMangler::x64();
    let rows = surface::entries()
        .into_iter()
        .map(|entry| {
            let symbol = entry.symbol(&mangler)?;
            let linkage = match entry.linkage {
                surface::Linkage::C { .. } => "c",
                surface::Linkage::Decorated { .. } => "decorated",
            };
            Ok(ExportRow {
                label: entry.label,
                symbol,
                linkage,
            })
        })
        .collect::<Result<Vec<_>, Box<dyn Error>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in rows {
            println!("{:<24} [{}] {}", row.label, row.linkage, row.symbol);
        }
    }
    Ok(())
}

fn run_check(library: &Path) -> Result<(), Box<dyn Error>> {
    info!(library = %library.display(), "verifying fixture exports");
    let report = harness::verify(library)?;

    for check in report.checks() {
        let status = if check.passed { "ok  " } else { "FAIL" };
        println!("{status} {:<32} {}", check.subject, check.detail);
    }

    let failed = report.failures().count();
    if failed > 0 {
        return Err(format!("{failed} check(s) failed").into());
    }
    println!("all {} checks passed", report.checks().len());
    Ok(())
}
