//! Resume tailor: keyword-driven resume analysis and tailoring tool

use clap::Parser;
use log::{error, info, warn};
use resume_tailor::analysis::{
    KeywordExtractor, KeywordMatcher, ScoreCalculator, SectionSegmenter, SuggestionEngine,
    SynonymTable,
};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::config::Config;
use resume_tailor::error::{Result, ResumeTailorError};
use resume_tailor::input::InputManager;
use resume_tailor::llm::{GeminiClient, PromptTemplates, TextOracle};
use resume_tailor::llm::structured::{job_requirements_defaults, merge_defaults};
use resume_tailor::output::{AnalysisReport, ReportFormatter};
use std::process;
use std::time::Instant;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
            tailor,
        } => {
            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, SUPPORTED_EXTENSIONS)
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeTailorError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            info!("Extracting resume text from {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Extracting job description text from {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            if resume_text.trim().is_empty() {
                warn!("Resume yielded no text; scores will be zero");
            }

            let started = Instant::now();

            let extractor = KeywordExtractor::with_options(
                config.keyword_matching.min_keyword_length,
                config.keyword_matching.case_sensitive,
            )?;
            let synonyms = SynonymTable::new();
            let matcher = KeywordMatcher::with_case_sensitivity(
                &synonyms,
                config.keyword_matching.case_sensitive,
            );
            let calculator = ScoreCalculator::new(config.scoring.clone());
            let segmenter = SectionSegmenter::new();
            let suggestion_engine = SuggestionEngine::new(config.scoring.clone());

            let candidate_keywords = extractor.extract(&resume_text);
            let target_keywords = extractor.extract(&job_text);
            info!(
                "Extracted {} resume keywords, {} job keywords",
                candidate_keywords.len(),
                target_keywords.len()
            );

            let partition = matcher.match_keywords(&candidate_keywords, &target_keywords);
            let score = calculator.score(&partition);
            let sections = segmenter.segment(&resume_text);
            let suggestions = suggestion_engine.suggest(&score, &partition, &sections);

            let tailored_resume = if tailor {
                Some(generate_tailored_resume(&config, &resume_text, &job_text, &partition, score.percent).await?)
            } else {
                None
            };

            let processing_time_ms = started.elapsed().as_millis();

            let report = AnalysisReport::new(
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
                score,
                &partition,
                candidate_keywords.len(),
                sections,
                suggestions,
                tailored_resume,
                processing_time_ms,
            );

            let formatter = ReportFormatter::new(
                output_format,
                detailed || config.output.detailed,
                config.output.color_output,
            );
            let rendered = formatter.render(&report)?;

            println!("{}", rendered);

            if let Some(save_path) = save {
                tokio::fs::write(&save_path, &rendered).await?;
                info!("Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeTailorError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Asks the oracle for structured job requirements, back-fills the schema
/// defaults, and generates a tailored resume from them.
async fn generate_tailored_resume(
    config: &Config,
    resume_text: &str,
    job_text: &str,
    partition: &resume_tailor::analysis::MatchPartition,
    percent: u8,
) -> Result<String> {
    let client = GeminiClient::from_config(&config.llm)?;
    let templates = PromptTemplates::default();

    info!("Requesting job requirement analysis from the generation API");
    let mut requirements = client
        .generate_structured(&templates.render_job_analysis(job_text))
        .await?;
    merge_defaults(&mut requirements, &job_requirements_defaults());

    let analysis = serde_json::json!({
        "match_score": percent,
        "matched_keywords": partition.matched.to_vec(),
        "missing_keywords": partition.missing.to_vec(),
    });

    info!("Requesting tailored resume from the generation API");
    client
        .generate(&templates.render_tailoring(
            resume_text,
            &requirements.to_string(),
            &analysis.to_string(),
        ))
        .await
}
