use crate::bank::{QuestionBank, TypeCatalog};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::quiz::{self, Outcome, ResultReport, view};
use crate::scoring::Rating;
use crate::session::QuizSession;
use crate::share::{self, ShareConfig};
use crate::store::AnswerStore;
use crate::ui::style as ui;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let bank = QuestionBank::load_or_builtin(config.question_bank.as_deref())
        .context("Failed to load question bank")?;
    let catalog = TypeCatalog::load_or_builtin(config.type_catalog.as_deref())
        .context("Failed to load type catalog")?;

    let store = AnswerStore::new(&config.data_dir, &config.storage_key);
    let mut session = QuizSession::new(&bank, store.load()).with_observer(store.clone());

    match cli.command {
        Commands::Start { restart, review } => {
            if restart {
                session.reset()?;
            }
            let outcome =
                quiz::run_interactive(&mut session, &catalog, config.display_nickname(), review)?;
            match outcome {
                Outcome::Completed => {
                    println!("  {}", ui::dim("Run `fsmbti share` to pass the quiz on."));
                }
                Outcome::Paused => {
                    let progress = session.progress();
                    println!();
                    println!(
                        "  {} {}",
                        ui::yellow("Paused"),
                        ui::dim(format!(
                            "{}/{} answered. Run `fsmbti start` to continue.",
                            progress.answered, progress.total
                        ))
                    );
                }
            }
            Ok(())
        }

        Commands::Answer { id, rating } => {
            let rating = Rating::new(rating)?;
            session.answer(id, rating)?;
            println!(
                "  {} {}. {}",
                ui::success("✓"),
                id,
                ui::value(format!("{rating}. {}", bank.scale_label(rating.value())))
            );
            println!("  {}", view::render_progress(&session.progress()));
            Ok(())
        }

        Commands::Questions => {
            view::print_questions(&bank, session.answers());
            Ok(())
        }

        Commands::Progress => {
            let progress = session.progress();
            println!("  {}", view::render_progress(&progress));
            if progress.is_complete() {
                println!("  {}", ui::dim("All questions answered. Run `fsmbti result`."));
            }
            Ok(())
        }

        Commands::Result { json, nickname } => {
            let result = session
                .final_result()
                .context("Answer every question first (`fsmbti start` resumes the quiz)")?;
            let nickname = nickname
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .or_else(|| config.display_nickname());
            let report = ResultReport::build(&bank, &catalog, &result, nickname);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                view::print_result(&report);
            }
            Ok(())
        }

        Commands::Reset { purge } => {
            if purge {
                store.clear()?;
            } else {
                session.reset()?;
            }
            println!("  {} Answers cleared.", ui::success("✓"));
            Ok(())
        }

        Commands::Share { link, qr_out } => {
            let share = ShareConfig {
                link: link.or_else(|| config.share.link.clone()),
                ..config.share.clone()
            };
            run_share(&share, qr_out.as_deref()).await?;
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShareOutcome {
    NoLink,
    Printed,
    Saved(usize),
    DownloadFailed,
}

/// Print the link and QR address; download the image when asked.
/// A failed download is reported but never fails the command.
pub(crate) async fn run_share(share: &ShareConfig, qr_out: Option<&Path>) -> Result<ShareOutcome> {
    let Some(qr) = share.qr_url()? else {
        println!("  {}", ui::dim("Link available after deployment."));
        if qr_out.is_some() {
            println!("  {}", ui::yellow("No share link configured; QR image unavailable."));
        }
        return Ok(ShareOutcome::NoLink);
    };

    if let Some(link) = share.link.as_deref() {
        println!("  Link  {}", ui::url(link));
    }
    println!("  QR    {}", ui::url(&qr));

    let Some(dest) = qr_out else {
        return Ok(ShareOutcome::Printed);
    };

    let client = share::build_share_client();
    match share::download_qr(&client, &qr, dest).await {
        Ok(bytes) => {
            println!(
                "  {} QR image saved to {} ({bytes} bytes)",
                ui::success("✓"),
                ui::value(dest.display())
            );
            Ok(ShareOutcome::Saved(bytes))
        }
        Err(err) => {
            tracing::warn!(error = %err, "QR download failed");
            println!("  {} {}", ui::yellow("QR download failed:"), err);
            Ok(ShareOutcome::DownloadFailed)
        }
    }
}
