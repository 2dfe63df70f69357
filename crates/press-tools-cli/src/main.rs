use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use press_desk::{
    AdjustmentRequest, ChapterComment, CommentThread, Sale, Seller, Submission, SubmissionFilter,
    SubmissionStatus, compose_adjustment_notice, compose_notice, monthly_report,
};
use press_estimate::{
    CostEstimationInput, EstimatorOptions, PageEstimationInput, estimate_cost,
    estimate_pages_with, parse_amount, parse_count, parse_lenient,
};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "prt", about = "Editorial press tools CLI", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the printed page count of a manuscript
    Pages {
        /// Total character count
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        characters: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        subtitles: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        chapters: String,

        /// Images fitting three to a page
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        small_images: String,

        /// Images fitting two to a page
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        medium_images: String,

        /// Full-page images
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        large_images: String,

        /// Book trim size
        #[arg(long, default_value = "16x23", value_enum)]
        trim: TrimArg,

        #[arg(long, default_value = "solo", value_enum)]
        authorship: AuthorshipArg,

        /// Keep only the digits of each count, treating empty input as 0
        #[arg(long)]
        lenient: bool,

        /// Estimator options (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Estimate production cost, royalties and profit of a print run
    Cost {
        /// Page count of the book
        #[arg(long, allow_hyphen_values = true)]
        pages: String,

        /// Number of copies
        #[arg(long, allow_hyphen_values = true)]
        print_run: String,

        /// Printing cost per page
        #[arg(long, allow_hyphen_values = true)]
        cost_per_page: String,

        #[arg(long, allow_hyphen_values = true)]
        cover_price: String,

        /// Author royalty percentage (defaults to the configured value)
        #[arg(long, allow_hyphen_values = true)]
        royalty: Option<String>,

        /// Estimator options (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List and filter chapter submissions, optionally exporting to CSV
    Submissions {
        /// Submissions CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Search author, email, book and chapter title
        #[arg(long)]
        search: Option<String>,

        /// Only show this status (e.g. under_review)
        #[arg(long)]
        status: Option<String>,

        /// Only show submissions assigned to this user id
        #[arg(long)]
        responsible: Option<String>,

        /// Write the filtered rows to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compose the author notice for a submission
    Notice {
        /// Submissions CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Submission id
        #[arg(long)]
        id: String,

        /// Status to notify about (defaults to the submission's current status)
        #[arg(long, conflicts_with = "note")]
        status: Option<String>,

        /// Request adjustments with this note
        #[arg(long)]
        note: Option<String>,
    },

    /// Show the print logistics board, optionally moving a job
    Board {
        /// Print jobs CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Filter by title, ISBN or invoice
        #[arg(long)]
        search: Option<String>,

        /// Move this job to the next stage
        #[arg(long, conflicts_with = "retreat")]
        advance: Option<String>,

        /// Move this job back to the previous stage
        #[arg(long)]
        retreat: Option<String>,

        /// Where to save moved jobs (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly sales ranking against personal and overall goals
    Sales {
        /// Sellers CSV file (id, name, personal_goal)
        #[arg(long)]
        sellers: PathBuf,

        /// Sales CSV file (seller_id, amount, date)
        #[arg(long)]
        sales: PathBuf,

        /// Month to report, as YYYY-MM
        #[arg(long)]
        month: String,

        /// Overall team goal for the month
        #[arg(long)]
        goal: Option<String>,

        /// Estimator options (JSON), for the currency
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a chapter's comment thread, optionally posting to it
    Comments {
        /// Comments CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Chapter (submission) id
        #[arg(long)]
        chapter: String,

        /// Post this comment
        #[arg(long, requires = "user")]
        post: Option<String>,

        /// Author of the posted comment
        #[arg(long)]
        user: Option<String>,

        /// Where to save after posting (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write default estimator options to a JSON file
    InitConfig {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TrimArg {
    #[value(name = "16x23")]
    Cm16x23,
    #[value(name = "14x21")]
    Cm14x21,
}

#[derive(Clone, Copy, ValueEnum)]
enum AuthorshipArg {
    Solo,
    CoAuthored,
}

impl From<TrimArg> for press_estimate::TrimSize {
    fn from(arg: TrimArg) -> Self {
        match arg {
            TrimArg::Cm16x23 => Self::Cm16x23,
            TrimArg::Cm14x21 => Self::Cm14x21,
        }
    }
}

impl From<AuthorshipArg> for press_estimate::Authorship {
    fn from(arg: AuthorshipArg) -> Self {
        match arg {
            AuthorshipArg::Solo => Self::Solo,
            AuthorshipArg::CoAuthored => Self::CoAuthored,
        }
    }
}

fn read_count(field: &'static str, text: &str, lenient: bool) -> Result<u64> {
    if !lenient {
        return Ok(parse_count(field, text)?);
    }
    if text.chars().any(|c| !c.is_ascii_digit()) {
        warn!("{}: ignoring non-digit characters in {:?}", field, text);
    }
    Ok(parse_lenient(text))
}

async fn load_options(config: Option<PathBuf>) -> Result<EstimatorOptions> {
    match config {
        Some(path) => {
            let options = EstimatorOptions::load(&path)
                .await
                .with_context(|| format!("loading options from {}", path.display()))?;
            info!("Loaded estimator options from {}", path.display());
            Ok(options)
        }
        None => Ok(EstimatorOptions::default()),
    }
}

fn money(value: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, value)
}

fn print_submissions(rows: &[&Submission]) {
    println!(
        "{:<10} {:<22} {:<24} {:<24} {}",
        "ID", "STATUS", "AUTHOR", "BOOK", "RECEIVED"
    );
    for s in rows {
        println!(
            "{:<10} {:<22} {:<24} {:<24} {}",
            s.id,
            s.status.label(),
            s.author_name,
            s.book,
            s.created_at.format("%Y-%m-%d")
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Pages {
            characters,
            subtitles,
            chapters,
            small_images,
            medium_images,
            large_images,
            trim,
            authorship,
            lenient,
            config,
        } => {
            let options = load_options(config).await?;
            let input = PageEstimationInput {
                character_count: read_count("character_count", &characters, lenient)?,
                subtitle_count: read_count("subtitle_count", &subtitles, lenient)?,
                chapter_count: read_count("chapter_count", &chapters, lenient)?,
                small_image_count: read_count("small_image_count", &small_images, lenient)?,
                medium_image_count: read_count("medium_image_count", &medium_images, lenient)?,
                large_image_count: read_count("large_image_count", &large_images, lenient)?,
                authorship: authorship.into(),
                trim_size: trim.into(),
            };
            debug!("Page estimation input: {:?}", input);

            let result = estimate_pages_with(&input, &options)?;
            println!("Page Estimate:");
            println!("  Trim size: {}", input.trim_size);
            println!("  Authorship: {}", input.authorship);
            println!("  Raw pages: {:.2}", result.raw_pages);
            println!("  Images: {}", result.total_image_count);
            println!(
                "  Estimated pages: {} ({} signatures of {})",
                result.estimated_pages, result.signatures, options.signature_pages
            );
        }

        Commands::Cost {
            pages,
            print_run,
            cost_per_page,
            cover_price,
            royalty,
            config,
        } => {
            let options = load_options(config).await?;
            let royalty_percent = match royalty {
                Some(text) => parse_amount("royalty_percent", &text)?,
                None => options.default_royalty_percent,
            };
            let input = CostEstimationInput {
                page_count: parse_amount("page_count", &pages)?,
                print_run_size: parse_amount("print_run_size", &print_run)?,
                cost_per_page: parse_amount("cost_per_page", &cost_per_page)?,
                cover_price: parse_amount("cover_price", &cover_price)?,
                royalty_percent,
            };
            debug!("Cost estimation input: {:?}", input);

            let result = estimate_cost(&input)?;
            let currency = options.currency.as_str();
            println!("Print Run Estimate:");
            println!(
                "  Total production cost: {}",
                money(result.total_production_cost, currency)
            );
            println!("  Gross revenue: {}", money(result.gross_revenue, currency));
            println!(
                "  Author royalties ({}%): {}",
                input.royalty_percent,
                money(result.total_author_royalties, currency)
            );
            println!(
                "  Publisher profit: {}",
                money(result.publisher_profit, currency)
            );
            println!(
                "  Profit per copy: {}",
                money(result.profit_per_unit, currency)
            );
            match input.break_even_cover_price()? {
                Some(price) => println!("  Break-even cover price: {}", money(price, currency)),
                None => println!("  Break-even cover price: none (royalty is 100%)"),
            }
        }

        Commands::Submissions {
            input,
            search,
            status,
            responsible,
            output,
        } => {
            let submissions = press_desk::load_from_csv(&input).await?;
            info!(
                "Loaded {} submissions from {}",
                submissions.len(),
                input.display()
            );

            let filter = SubmissionFilter {
                search,
                status: status.as_deref().map(str::parse).transpose()?,
                responsible_user_id: responsible,
            };
            let matched = filter.apply(&submissions);
            print_submissions(&matched);
            println!("{} of {} submissions", matched.len(), submissions.len());

            if let Some(output) = output {
                let rows: Vec<Submission> = matched.into_iter().cloned().collect();
                press_desk::export_to_csv(&rows, &output).await?;
                println!("Exported {} rows → {}", rows.len(), output.display());
            }
        }

        Commands::Notice {
            input,
            id,
            status,
            note,
        } => {
            let submissions = press_desk::load_from_csv(&input).await?;

            let notice = match note {
                Some(admin_note) => {
                    let request = AdjustmentRequest {
                        submission_id: id,
                        admin_note,
                    };
                    compose_adjustment_notice(&submissions, &request)?
                }
                None => {
                    let Some(submission) = submissions.iter().find(|s| s.id == id) else {
                        bail!("Submission {} not found in {}", id, input.display());
                    };
                    let status: SubmissionStatus = match status {
                        Some(text) => text.parse()?,
                        None => submission.status,
                    };
                    let Some(notice) = compose_notice(submission, status) else {
                        println!("No notice needed for status \"{}\"", status);
                        return Ok(());
                    };
                    notice
                }
            };

            println!("To: {}", notice.to);
            println!("Subject: {}", notice.subject);
            println!();
            print!("{}", notice.body);
        }

        Commands::Board {
            input,
            search,
            advance,
            retreat,
            output,
        } => {
            let mut jobs = press_desk::load_print_jobs(&input).await?;

            let moving = advance.as_ref().or(retreat.as_ref()).cloned();
            if let Some(id) = moving {
                let Some(job) = jobs.iter_mut().find(|j| j.id == id) else {
                    bail!("Print job {} not found in {}", id, input.display());
                };
                let moved = if advance.is_some() {
                    job.advance()
                } else {
                    job.retreat()
                };
                if moved {
                    info!("Moved {} to \"{}\"", job.id, job.stage);
                    let path = output.unwrap_or_else(|| input.clone());
                    press_desk::save_print_jobs(&jobs, &path).await?;
                } else {
                    warn!("{} is already in \"{}\"; nothing to move", job.id, job.stage);
                }
            }

            let term = search.unwrap_or_default();
            let visible: Vec<_> = jobs
                .iter()
                .filter(|j| j.matches_search(&term))
                .cloned()
                .collect();
            let today = chrono::Local::now().date_naive();
            for (stage, column) in press_desk::group_by_stage(&visible) {
                println!("{} ({})", stage, column.len());
                for job in column {
                    let late = if job.is_late(today) { "  LATE" } else { "" };
                    println!(
                        "  {:<10} {:<30} {} copies{}",
                        job.id, job.book_title, job.requested_copies, late
                    );
                }
            }
        }

        Commands::Sales {
            sellers,
            sales,
            month,
            goal,
            config,
        } => {
            let options = load_options(config).await?;
            let first_day = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
                .with_context(|| format!("month must look like 2024-05, got {:?}", month))?;
            let overall_goal = goal
                .as_deref()
                .map(|text| parse_amount("goal", text))
                .transpose()?;

            let sellers: Vec<Seller> = press_desk::read_records(&sellers).await?;
            let sales: Vec<Sale> = press_desk::read_records(&sales).await?;
            info!("Loaded {} sellers and {} sales", sellers.len(), sales.len());

            let report = monthly_report(
                &sellers,
                &sales,
                first_day.year(),
                first_day.month(),
                overall_goal,
            )?;
            let currency = options.currency.as_str();

            println!("Sales {}:", first_day.format("%Y-%m"));
            if let Some(goal) = report.overall_goal {
                println!(
                    "  Overall goal: {} ({:.1}% reached)",
                    money(goal, currency),
                    report.overall_progress_percent()
                );
            }
            println!("  Total sold: {}", money(report.total_sold, currency));
            for standing in &report.standings {
                let top = if report.top_seller_id.as_deref() == Some(standing.seller_id.as_str()) {
                    "  TOP"
                } else {
                    ""
                };
                let reached = if standing.goal_reached { "  GOAL" } else { "" };
                println!(
                    "  {:<24} {} / {} ({:.1}%){}{}",
                    standing.name,
                    money(standing.total_sold, currency),
                    money(standing.personal_goal, currency),
                    standing.progress_percent,
                    reached,
                    top
                );
            }
        }

        Commands::Comments {
            input,
            chapter,
            post,
            user,
            output,
        } => {
            let all: Vec<ChapterComment> = press_desk::read_records(&input).await?;
            let (mine, others): (Vec<_>, Vec<_>) =
                all.into_iter().partition(|c| c.chapter_id == chapter);
            let mut thread = CommentThread::from_comments(chapter.as_str(), mine);

            if let Some(text) = post {
                let now = Utc::now();
                let id = format!("c{}", now.timestamp_millis());
                thread.post(id, user.as_deref().unwrap_or_default(), &text, now)?;

                let mut rows = others;
                rows.extend(thread.comments().iter().cloned());
                let path = output.unwrap_or_else(|| input.clone());
                press_desk::write_records(&rows, &path).await?;
                info!("Saved {} comments to {}", rows.len(), path.display());
            }

            println!("Comments on {} ({})", thread.chapter_id(), thread.len());
            for comment in thread.comments() {
                println!(
                    "  [{}] {}: {}",
                    comment.created_at.format("%Y-%m-%d %H:%M"),
                    comment.user_id,
                    comment.comment
                );
            }
        }

        Commands::InitConfig { output } => {
            EstimatorOptions::default().save(&output).await?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
