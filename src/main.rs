use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Month;
use clap::{Parser, Subcommand};
use tracing::warn;

use kisan_mausam::knowledge::{crop_profile, current_month};
use kisan_mausam::report::{AdvisoryReport, PlanReport, StateRisks, WeatherOutlook, resolve_state};
use kisan_mausam::weather::{OpenWeatherClient, Unconfigured};
use kisan_mausam::{AdvisoryError, AppConfig, Crop, Farmer, build_plan, build_report, logging};

/// Weather-based crop advisories for Indian farmers
#[derive(Parser, Debug)]
#[command(name = "kisan-mausam", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Weather, forecast stability, regional risks and crop advisories
    Advise {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        /// NAME, or NAME:SEASON:AREA for crops outside the knowledge base
        #[arg(long = "crop", value_name = "CROP", value_parser = parse_crop)]
        crops: Vec<Crop>,
        /// Month for the risk calendar (defaults to the current month)
        #[arg(long, value_parser = parse_month)]
        month: Option<Month>,
    },
    /// Water, urea and seed estimates per crop
    Plan {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long = "crop", value_name = "NAME:SEASON:AREA", value_parser = parse_crop, required = true)]
        crops: Vec<Crop>,
        #[arg(long, value_parser = parse_month)]
        month: Option<Month>,
    },
    /// Regional weather risks for a state
    Risks {
        #[arg(long)]
        state: String,
        #[arg(long, value_parser = parse_month)]
        month: Option<Month>,
    },
}

fn parse_month(value: &str) -> Result<Month, String> {
    let value = value.trim();
    if let Ok(number) = value.parse::<u8>() {
        return Month::try_from(number).map_err(|_| format!("month number out of range: {value}"));
    }
    value
        .parse::<Month>()
        .map_err(|_| format!("unknown month '{value}'"))
}

/// A bare name takes its season from the knowledge base and one acre
fn parse_crop(value: &str) -> Result<Crop, String> {
    if value.contains(':') {
        return value.parse::<Crop>().map_err(|e| e.to_string());
    }
    let profile = crop_profile(value).ok_or_else(|| {
        format!("unknown crop '{value}', use NAME:SEASON:AREA for crops outside the knowledge base")
    })?;
    Crop::new(value, profile.season, 1.0).map_err(|e| e.to_string())
}

fn farmer_for(config: &AppConfig, city: Option<String>, state: Option<String>, crops: Vec<Crop>) -> Result<Farmer> {
    let city = city.unwrap_or_else(|| config.defaults.city.clone());
    let state = resolve_state(&city, state.as_deref()).unwrap_or_else(|| config.defaults.state.clone());
    let mut farmer = Farmer::register("cli", Some(&state), Some(&city))?;
    for crop in crops {
        farmer.add_crop(crop);
    }
    Ok(farmer)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    run(cli).await.inspect_err(|e| {
        if let Some(err) = e.chain().find_map(|cause| cause.downcast_ref::<AdvisoryError>()) {
            eprintln!("{}", err.user_message());
        }
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load_from_path(cli.config.clone()).context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Risks { state, month } => {
            let Some(state) = resolve_state("", Some(state.as_str())) else {
                bail!("State name cannot be empty");
            };
            let risks = StateRisks::lookup(&state, month.unwrap_or_else(current_month));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&risks)?);
            } else {
                print_risks(&risks);
            }
        }
        Command::Advise { city, state, crops, month } => {
            let farmer = farmer_for(&config, city, state, crops)?;
            let month = month.unwrap_or_else(current_month);
            let report = match OpenWeatherClient::new(&config.weather) {
                Ok(client) => build_report(&client, &farmer, month).await,
                Err(e) => {
                    warn!(error = %e, "Weather provider unavailable, using fallback weather");
                    build_report(&Unconfigured, &farmer, month).await
                }
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Plan { city, state, crops, month } => {
            let farmer = farmer_for(&config, city, state, crops)?;
            let month = month.unwrap_or_else(current_month);
            let plan = match OpenWeatherClient::new(&config.weather) {
                Ok(client) => build_plan(&client, &farmer, month).await,
                Err(e) => {
                    warn!(error = %e, "Weather provider unavailable, using fallback weather");
                    build_plan(&Unconfigured, &farmer, month).await
                }
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
        }
    }

    Ok(())
}

fn print_outlook(outlook: &WeatherOutlook) {
    let current = &outlook.current;
    println!("🌤️  {} - {}, {}% humidity, {}", current.city, current.format_temperature(), current.humidity, current.description);
    if let Some(days) = &outlook.forecast {
        for day in days {
            let rain = if day.rain { " 🌧️" } else { "" };
            println!("   {}  {}  {}{rain}", day.date.format("%a %d %b"), day.format_temperature_range(), day.description);
        }
    }
    println!("{}", outlook.summary_en);
    println!("{}", outlook.summary_hi);
    if let Some(analysis) = &outlook.analysis {
        for warning in &analysis.warnings {
            println!("   ⚠️ {warning}");
        }
    }
}

fn print_risks(risks: &StateRisks) {
    println!("{}", risks.summary_en);
    println!("{}", risks.summary_hi);
    for risk in &risks.risks {
        println!("{risk}");
    }
}

fn print_report(report: &AdvisoryReport) {
    print_outlook(&report.outlook);
    println!();
    print_risks(&report.state_risks);

    let summary = &report.daily.summary;
    println!();
    println!("📋 {} - {} / {}", summary.primary_action, summary.primary_action_en, summary.primary_action_hi);
    println!("   {}", summary.weather_tip_en);
    println!("   {}", summary.weather_tip_hi);
    println!(
        "   {} crops: {} under stress, {} need monitoring, {} doing well",
        summary.total_crops, summary.crops_under_stress, summary.crops_needing_monitoring, summary.crops_doing_well
    );
    println!("   {}", report.status.advice_en);

    for action in &report.daily.priority_actions {
        println!("   {} [P{}] {}: {}", action.icon, action.priority, action.crop, action.action_en);
    }

    for crop in &report.crops {
        println!();
        println!("🌱 {} ({}, {} acres)", crop.crop.name, crop.crop.season, crop.crop.area_acres);
        for advisory in &crop.insights {
            println!("{advisory}");
        }
    }
}

fn print_plan(report: &PlanReport) {
    print_outlook(&report.outlook);
    let plan = &report.plan;
    println!();
    println!(
        "🚜 {} ({}) - {} acres, {} litres saved",
        plan.city,
        plan.state.as_deref().unwrap_or("Unknown"),
        plan.total_area,
        plan.total_water_saved_litres
    );
    for crop in &plan.crops {
        println!();
        println!("🌱 {} ({}, {} acres) efficiency {}", crop.crop, crop.season, crop.area_acres, crop.efficiency_score);
        println!(
            "   water {} L (x{:.2}, {}% change), urea {:.1} kg, seeds {:.1} kg",
            crop.water_litres, crop.water_multiplier, crop.water_change_percent, crop.urea_kg, crop.seeds_kg
        );
        println!("   {} / {}", crop.irrigation_advice_en, crop.irrigation_advice_hi);
        for alert in &crop.weather_alerts {
            println!("   {} {}", alert.icon, alert.message_en);
        }
        if let Some(risk) = crop.state_alert {
            println!("   {} {}: {}", risk.icon, risk.name_en, risk.farm_impact_en);
        }
    }
}
