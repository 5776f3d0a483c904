//! Digitext CLI — command-line client for a remote OCR service.
//!
//! Set DIGITEXT_API_URL (or API_URL) to point at the service. Files are
//! validated locally, uploaded as one job, and polled to completion.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use digitext_api_client::api::{mime_for_extension, UploadFile};
use digitext_api_client::OcrClient;
use digitext_cli::{init_tracing, render_result, write_text_outputs};
use digitext_core::{partition_candidates, FileCandidate, ResultResponse, Session};

#[derive(Parser)]
#[command(name = "digitext", about = "OCR document digitizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload files for OCR and wait for the extracted text
    Submit {
        /// Paths of the image/PDF files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print raw results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
        /// Write each result's text to {name}_extracted.txt in this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Check the OCR service health
    Health,
    /// Show the formats the server advertises
    Formats,
    /// Delete a job and its results on the server
    Delete {
        /// Job identifier returned at upload time
        job_id: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = OcrClient::from_env()
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to create API client. Set DIGITEXT_API_URL (or API_URL)")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            files,
            json,
            output_dir,
        } => submit(&client, files, json, output_dir).await?,
        Commands::Health => {
            let health = client.health().await;
            let mut line = format!("API status: {}", health.status);
            if let Some(version) = &health.tesseract_version {
                line.push_str(&format!(" • Tesseract {}", version));
            }
            if let Some(error) = &health.error {
                line.push_str(&format!(" ({})", error));
            }
            println!("{}", line);
        }
        Commands::Formats => {
            let formats = client
                .supported_formats()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            print_json(&formats)?;
        }
        Commands::Delete { job_id } => {
            client
                .delete_job(&job_id)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            print_json(&serde_json::json!({
                "success": true,
                "message": format!("Job {} deleted", job_id)
            }))?;
        }
    }

    Ok(())
}

async fn submit(
    client: &OcrClient,
    paths: Vec<PathBuf>,
    json: bool,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Local intake validation before any network call.
    let mut pairs = Vec::with_capacity(paths.len());
    for path in paths {
        let metadata = std::fs::metadata(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let candidate =
            FileCandidate::new(name.clone(), metadata.len(), mime_for_extension(&name));
        pairs.push((candidate, path));
    }

    let partition =
        partition_candidates(pairs.iter().map(|(c, _)| c.clone()).collect(), client.config());
    for line in partition.rejection_lines() {
        eprintln!("rejected: {}", line);
    }
    if !partition.is_submittable() {
        bail!("No valid files to submit");
    }

    // Accepted files form an ordered subsequence of the selection.
    let mut files = Vec::with_capacity(partition.accepted.len());
    let mut accepted = partition.accepted.iter();
    let mut next = accepted.next();
    for (candidate, path) in &pairs {
        if Some(candidate) == next {
            files.push(UploadFile::from_path(path).map_err(|e| anyhow::anyhow!(e.user_message()))?);
            next = accepted.next();
        }
    }

    let mut session = Session::new();
    let attempt_token = session.begin();

    let job = client
        .upload_files(files)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    session.set_job(attempt_token, job.job_id.clone());
    eprintln!("job {}: submitted ({} files)", job.job_id, job.files_count);

    let mut polls = 0u32;
    let mut progress = |snapshot: &ResultResponse| {
        polls += 1;
        eprintln!("job {}: {} (poll {})", snapshot.job_id, snapshot.status, polls);
    };

    match client.poll_for_results(&job.job_id, Some(&mut progress)).await {
        Ok(outcome) if outcome.status == digitext_core::JobStatus::Completed => {
            session.complete(attempt_token, outcome.results);
            let results = session.results().unwrap_or_default();

            if json {
                print_json(&results)?;
            } else {
                for result in results {
                    print!("{}", render_result(result));
                }
            }
            if let Some(dir) = output_dir {
                let written = write_text_outputs(results, &dir)?;
                for path in written {
                    eprintln!("wrote {}", path.display());
                }
            }
            Ok(())
        }
        Ok(outcome) => {
            let err = digitext_core::ClientError::job_failed(outcome.error_message);
            session.fail(attempt_token, err.user_message());
            bail!(err.user_message())
        }
        Err(err) => {
            session.fail(attempt_token, err.user_message());
            bail!(err.user_message())
        }
    }
}
