//! Command-line viewer for AlphaFold 3 prediction outputs.
//!
//! Usage:
//!
//! ```text
//! af3view [--options FILE] [--out DIR] [--api-key KEY] [--analyze] FILES...
//! ```
//!
//! Ingests the given `.cif`/`.json` files and writes the PAE heatmap, the
//! pLDDT chart, and a plain-text metric report into the output directory.
//! With `--analyze`, a generated quality summary is appended to the report.

use std::path::PathBuf;
use std::process;

use af3view::analysis::AnalysisClient;
use af3view::error::ViewerError;
use af3view::options::Options;
use af3view::{chart, heatmap, ingest, report};

const USAGE: &str =
    "Usage: af3view [--options FILE] [--out DIR] [--api-key KEY] \
     [--analyze] FILES...";

struct Cli {
    files: Vec<PathBuf>,
    options_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    api_key: Option<String>,
    analyze: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Cli, String> {
    let mut cli = Cli {
        files: Vec::new(),
        options_path: None,
        out_dir: None,
        api_key: None,
        analyze: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--options needs a path\n{USAGE}"))?;
                cli.options_path = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--out needs a path\n{USAGE}"))?;
                cli.out_dir = Some(PathBuf::from(value));
            }
            "--api-key" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--api-key needs a value\n{USAGE}"))?;
                cli.api_key = Some(value);
            }
            "--analyze" => cli.analyze = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag {other}\n{USAGE}"));
            }
            other => cli.files.push(PathBuf::from(other)),
        }
    }

    if cli.files.is_empty() {
        return Err(USAGE.to_owned());
    }
    Ok(cli)
}

fn run(cli: &Cli) -> Result<(), ViewerError> {
    let mut options = match &cli.options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(dir) = &cli.out_dir {
        options.output.directory.clone_from(dir);
    }
    if cli.api_key.is_some() {
        options.analysis.api_key.clone_from(&cli.api_key);
    }

    let loaded = ingest::load_paths(&cli.files)?;
    log::info!(
        "loaded {} ({} bytes of mmCIF)",
        loaded.name,
        loaded.cif.len()
    );

    let out = &options.output;
    std::fs::create_dir_all(&out.directory)?;

    let mut analysis_text: Option<String> = None;

    if let Some(record) = &loaded.confidences {
        if let Some(pae) = record.pae.as_deref() {
            let path = out.directory.join(format!("{}_pae.png", loaded.name));
            if heatmap::save_png(pae, &path, out.heatmap_scale)? {
                log::info!("wrote {}", path.display());
            }
            let legend_path =
                out.directory.join(format!("{}_pae_scale.png", loaded.name));
            let width = (pae.len() as u32 * out.heatmap_scale).max(64);
            heatmap::color_scale(width, out.legend_height)
                .save(&legend_path)?;
            log::info!("wrote {}", legend_path.display());
        } else {
            log::info!("PAE data not found in uploaded files");
        }

        if let Some(plddt) = record.plddt.as_deref() {
            let path =
                out.directory.join(format!("{}_plddt.png", loaded.name));
            if chart::save_png(
                plddt,
                &path,
                (out.chart_width, out.chart_height),
            )? {
                log::info!("wrote {}", path.display());
            }
        } else {
            log::info!("pLDDT data not found");
        }

        if cli.analyze {
            match AnalysisClient::new(&options.analysis) {
                Ok(client) => {
                    analysis_text =
                        Some(client.analyze(record, &loaded.name));
                }
                Err(e) => log::warn!("skipping analysis: {e}"),
            }
        }
    } else {
        log::info!("metrics not available: upload JSON files to see details");
        if cli.analyze {
            log::warn!("skipping analysis: no metrics to analyze");
        }
    }

    let mut report_text = loaded.confidences.as_ref().map_or_else(
        || {
            format!(
                "Prediction: {}\n\nMetrics not available. Upload JSON files \
                 to see details.\n",
                loaded.name
            )
        },
        |record| report::summarize(record, &loaded.name),
    );
    if let Some(text) = analysis_text {
        report_text.push_str("\nAnalysis:\n");
        report_text.push_str(&text);
        report_text.push('\n');
    }

    let report_path =
        out.directory.join(format!("{}_report.txt", loaded.name));
    std::fs::write(&report_path, report_text)?;
    log::info!("wrote {}", report_path.display());

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            log::error!("{msg}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(list: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        list.iter().map(|s| (*s).to_owned())
    }

    #[test]
    fn parses_flags_and_files() {
        let cli = parse_args(args(&[
            "--out",
            "artifacts",
            "--analyze",
            "model.cif",
            "confidences.json",
        ]))
        .unwrap();
        assert_eq!(cli.out_dir, Some(PathBuf::from("artifacts")));
        assert!(cli.analyze);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn rejects_unknown_flags_and_empty_input() {
        assert!(parse_args(args(&["--wat"])).is_err());
        assert!(parse_args(args(&[])).is_err());
    }

    #[test]
    fn end_to_end_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let cif = dir.path().join("demo_model.cif");
        let json = dir.path().join("demo_confidences.json");
        std::fs::write(&cif, "data_demo\n").unwrap();
        std::fs::write(
            &json,
            r#"{"pae": [[0,10],[10,0]], "plddt": [95.0, 60.0], "ptm": 0.8}"#,
        )
        .unwrap();

        let out = dir.path().join("out");
        let cli = Cli {
            files: vec![cif, json],
            options_path: None,
            out_dir: Some(out.clone()),
            api_key: None,
            analyze: false,
        };
        run(&cli).unwrap();

        assert!(out.join("demo_pae.png").exists());
        assert!(out.join("demo_pae_scale.png").exists());
        assert!(out.join("demo_plddt.png").exists());
        let report =
            std::fs::read_to_string(out.join("demo_report.txt")).unwrap();
        assert!(report.contains("Prediction: demo"));
        assert!(report.contains("pTM:                 0.80"));
    }
}
