mod config;
mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use config::AppConfig;
use log::info;
use retro_grain_adapters::{
    present_effect_config, present_preset_row, present_receipt, present_render_plan,
    present_uploaded, render_plan_json, render_preview_html, FsImageExporter, FsImageLoader,
    SeededDateSource, ThreadRngDateSource,
};
use retro_grain_application::{
    AdjustEffectCommand, ApplicationService, ApplyPresetCommand, CloseSessionCommand, DateSource,
    GenerateDateStampCommand, ListPresetsQuery, RegenerateDateStampCommand, RenderPreviewQuery,
    SaveImageCommand, UploadImageCommand,
};
use retro_grain_domain::{build_filter_expression, EffectAdjustment, FilterPreset};

#[derive(Debug, Parser)]
#[command(name = "retro-grain", version, about = "Early 2000s photo effects")]
struct Cli {
    /// Config file, defaults to ./retro-grain.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for random date stamps.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List presets with their filter expressions.
    Presets,
    /// Print the CSS filter expression for a preset, with optional overrides.
    Filter(FilterArgs),
    /// Print a date stamp for YYYY-MM-DD, or a random one from 2000-2010.
    Stamp {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Load an image, apply effects and describe the preview.
    Edit {
        image: PathBuf,
        #[arg(long)]
        preset: Option<FilterPreset>,
        /// Manual edit such as `sepia=0.4` or `vignette=off`; repeatable.
        #[arg(long = "set", short = 's')]
        adjustments: Vec<EffectAdjustment>,
        /// Draw a fresh date stamp after the edits. Needs the stamp enabled.
        #[arg(long)]
        regenerate_stamp: bool,
        /// Print the render plan as JSON.
        #[arg(long)]
        json: bool,
        /// Write an HTML preview page.
        #[arg(long)]
        html: Option<PathBuf>,
        /// Save the image. Effects are not baked in.
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

/// Overrides are written into the expression as given, without the slider
/// clamping that `edit --set` applies.
#[derive(Debug, Clone, Default, Args)]
struct FilterArgs {
    #[arg(long)]
    preset: Option<FilterPreset>,
    #[arg(long, allow_negative_numbers = true)]
    brightness: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    saturation: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    sepia: Option<f32>,
}

impl FilterArgs {
    fn expression(&self, default_preset: FilterPreset) -> String {
        let mut effects = self.preset.unwrap_or(default_preset).config();
        effects.brightness = self.brightness.unwrap_or(effects.brightness);
        effects.contrast = self.contrast.unwrap_or(effects.contrast);
        effects.saturation = self.saturation.unwrap_or(effects.saturation);
        effects.sepia = self.sepia.unwrap_or(effects.sepia);
        build_filter_expression(&effects)
    }
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(1);
        }
    };
    logging::init_logging(&config.log_level);

    let mut service = build_application_service(cli.seed);
    match run_command(cli.command, &mut service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(seed: Option<u64>) -> ApplicationService {
    let dates: Box<dyn DateSource> = match seed {
        Some(seed) => Box::new(SeededDateSource::new(seed)),
        None => Box::new(ThreadRngDateSource),
    };
    ApplicationService::new(Box::new(FsImageLoader), Box::new(FsImageExporter), dates)
}

fn run_command(
    command: Command,
    service: &mut ApplicationService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command {
        Command::Presets => {
            for row in service.list_presets(ListPresetsQuery) {
                println!("{}", present_preset_row(&row));
            }
            Ok(())
        }
        Command::Filter(args) => {
            println!("{}", args.expression(config.default_preset));
            Ok(())
        }
        Command::Stamp { date } => {
            println!(
                "{}",
                service.generate_date_stamp(GenerateDateStampCommand { reference: date })
            );
            Ok(())
        }
        Command::Edit {
            image,
            preset,
            adjustments,
            regenerate_stamp,
            json,
            html,
            save,
        } => {
            let result = run_edit(
                service,
                config,
                EditRequest {
                    image,
                    preset: preset.unwrap_or(config.default_preset),
                    adjustments,
                    regenerate_stamp,
                    json,
                    html,
                    save,
                },
            );
            service.close_session(CloseSessionCommand);
            result
        }
    }
}

#[derive(Debug, Clone)]
struct EditRequest {
    image: PathBuf,
    preset: FilterPreset,
    adjustments: Vec<EffectAdjustment>,
    regenerate_stamp: bool,
    json: bool,
    html: Option<PathBuf>,
    save: Option<PathBuf>,
}

fn run_edit(
    service: &mut ApplicationService,
    config: &AppConfig,
    request: EditRequest,
) -> Result<(), CommandError> {
    let uploaded = service
        .upload_image(UploadImageCommand {
            path: request.image.clone(),
        })
        .map_err(|error| CommandError::Runtime(format!("upload failed: {error}")))?;
    eprintln!("{}", present_uploaded(&uploaded));

    let mut effects = service
        .apply_preset(ApplyPresetCommand {
            preset: request.preset,
        })
        .map_err(|error| CommandError::Runtime(format!("preset failed: {error}")))?;
    for adjustment in request.adjustments {
        effects = service
            .adjust_effect(AdjustEffectCommand { adjustment })
            .map_err(|error| CommandError::Usage(format!("invalid adjustment: {error}")))?;
    }
    if request.regenerate_stamp {
        let stamp = service
            .regenerate_date_stamp(RegenerateDateStampCommand)
            .map_err(|error| CommandError::Usage(format!("cannot regenerate stamp: {error}")))?;
        eprintln!("date stamp {stamp}");
    }

    let selected = service
        .session()
        .map(|session| session.selected_preset())
        .unwrap_or(request.preset);
    let plan = service
        .render_preview(RenderPreviewQuery)
        .map_err(|error| CommandError::Runtime(format!("render failed: {error}")))?;

    if request.json {
        let json = render_plan_json(&plan)
            .map_err(|error| CommandError::Runtime(format!("render failed: {error}")))?;
        println!("{json}");
    } else {
        println!("{}", present_effect_config(selected, &effects));
        println!("{}", present_render_plan(&plan));
    }

    if let Some(html) = request.html {
        let target = config.output_path(&html);
        let page = render_preview_html(&image_source(&request.image), &plan);
        write_file(&target, &page)?;
        info!("wrote preview page {}", target.display());
        eprintln!("wrote preview {}", target.display());
    }

    if let Some(save) = request.save {
        let receipt = service
            .save_image(SaveImageCommand {
                destination: config.output_path(&save),
            })
            .map_err(|error| CommandError::Runtime(format!("save failed: {error}")))?;
        eprintln!("{}", present_receipt(&receipt));
    }

    Ok(())
}

fn image_source(path: &Path) -> String {
    match path.canonicalize() {
        Ok(absolute) => format!("file://{}", absolute.display()),
        Err(_) => path.display().to_string(),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), CommandError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| {
                CommandError::Runtime(format!("failed to create {}: {error}", parent.display()))
            })?;
        }
    }
    fs::write(path, contents).map_err(|error| {
        CommandError::Runtime(format!("failed to write {}: {error}", path.display()))
    })
}
