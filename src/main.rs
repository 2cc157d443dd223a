use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use log::warn;
use rand::rngs::StdRng;

use weekly_menu_planner_rs::catalog::{
    load_catalog, load_custom_config, load_keywords, load_plan, save_plan, CatalogSnapshot,
};
use weekly_menu_planner_rs::cli::{Cli, Command, PlanArgs};
use weekly_menu_planner_rs::error::{PlannerError, Result};
use weekly_menu_planner_rs::interface::{
    display_meal_plan, display_statistics, display_suggestions, export_plan_csv, prompt_mode,
    prompt_yes_no,
};
use weekly_menu_planner_rs::models::{
    ApiRequest, ErrorResponse, GenerateRequest, MealPlan, OptimizeRequest, PlanMode,
};
use weekly_menu_planner_rs::planner::{
    ExclusionFallback, KeywordTable, MenuPlanner, PlannerOptions, RngSource,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Generate {
            args,
            allow_excluded_fallback,
        } => cmd_generate(&cli, args, *allow_excluded_fallback),
        Command::Optimize { args, yes } => cmd_optimize(&cli, args, *yes),
        Command::Stats { plan } => cmd_stats(&cli, plan),
        Command::ServeRequest { request } => cmd_serve_request(&cli, request),
    }
}

/// Load catalog and keywords and build a planner for the selected tenant.
fn build_planner(cli: &Cli, exclusion_fallback: ExclusionFallback) -> Result<MenuPlanner> {
    let catalog = load_catalog(&cli.catalog)?;
    let snapshot = CatalogSnapshot::load(&catalog, &catalog, &cli.tenant)?;

    let keywords = match &cli.keywords {
        Some(path) => load_keywords(path)?.normalized(),
        None => KeywordTable::builtin(),
    };

    Ok(MenuPlanner::new(snapshot, keywords).with_options(PlannerOptions {
        season: cli.season,
        exclusion_fallback,
    }))
}

fn rng(cli: &Cli) -> RngSource<StdRng> {
    match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    }
}

fn resolve_mode(args: &PlanArgs) -> Result<PlanMode> {
    match args.mode {
        Some(mode) => Ok(mode),
        None => prompt_mode(),
    }
}

/// Save the plan wherever `--out` and `--csv` point.
fn write_outputs(args: &PlanArgs, plan: &MealPlan) -> Result<()> {
    if let Some(out) = &args.out {
        save_plan(out, plan)?;
        println!("Plan saved to {}", out.display());
    }
    if let Some(csv) = &args.csv {
        export_plan_csv(csv, plan)?;
        println!("Plan exported to {}", csv.display());
    }
    Ok(())
}

/// Fill the empty slots of a plan.
fn cmd_generate(cli: &Cli, args: &PlanArgs, allow_excluded_fallback: bool) -> Result<()> {
    let fallback = if allow_excluded_fallback {
        ExclusionFallback::FirstUnfiltered
    } else {
        ExclusionFallback::Reject
    };
    let planner = build_planner(cli, fallback)?;

    let request = GenerateRequest {
        mode: resolve_mode(args)?,
        week_number: args.week,
        current_plan: args.plan.as_ref().map(load_plan).transpose()?.unwrap_or_default(),
        custom_config: args.config.as_ref().map(load_custom_config).transpose()?,
    };

    let response = planner.generate(&request, &mut rng(cli))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_meal_plan(&response.meal_plan);
        display_statistics(&response.statistics);
        println!("{}", response.message);
    }

    if response.exclusion_fallback_used {
        warn!("Exclusions removed every recipe; this plan may contain excluded meals");
    }

    write_outputs(args, &response.meal_plan)
}

/// Improve an existing plan and optionally write it back.
fn cmd_optimize(cli: &Cli, args: &PlanArgs, yes: bool) -> Result<()> {
    let Some(plan_path) = &args.plan else {
        return Err(PlannerError::InvalidInput(
            "optimize needs an existing plan (--plan)".to_string(),
        ));
    };

    let planner = build_planner(cli, ExclusionFallback::Reject)?;

    let request = OptimizeRequest {
        mode: resolve_mode(args)?,
        week_number: args.week,
        current_plan: load_plan(plan_path)?,
        custom_config: args.config.as_ref().map(load_custom_config).transpose()?,
    };

    let response = planner.optimize(&request, &mut rng(cli))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_meal_plan(&response.meal_plan);
        display_suggestions(&response.suggestions, &response.improvements);
        display_statistics(&response.statistics);
        println!("{}", response.message);
    }

    if response.suggestions.is_empty() {
        return Ok(());
    }

    if args.out.is_none() && args.csv.is_none() {
        let save = yes || prompt_yes_no(&format!("Update {}?", plan_path.display()), true)?;
        if save {
            save_plan(plan_path, &response.meal_plan)?;
            println!("Plan saved.");
        }
        return Ok(());
    }

    if yes || prompt_yes_no("Write optimized plan?", true)? {
        write_outputs(args, &response.meal_plan)?;
    }

    Ok(())
}

/// Print statistics for a saved plan.
fn cmd_stats(cli: &Cli, plan_path: &Path) -> Result<()> {
    let planner = build_planner(cli, ExclusionFallback::Reject)?;
    let plan = load_plan(plan_path)?;

    display_meal_plan(&plan);
    display_statistics(&planner.statistics(&plan));

    Ok(())
}

fn read_request(path: &Path) -> Result<ApiRequest> {
    let mut body = String::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut body)?;
    } else {
        body = std::fs::read_to_string(path)?;
    }
    Ok(serde_json::from_str(&body)?)
}

/// Answer one JSON request on stdout, `{"error": ...}` on failure.
fn cmd_serve_request(cli: &Cli, path: &Path) -> Result<()> {
    let outcome = read_request(path).and_then(|request| {
        let planner = build_planner(cli, ExclusionFallback::Reject)?;
        planner.handle(&request, &mut rng(cli))
    });

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string(&ErrorResponse::new(&e))?);
            Err(e)
        }
    }
}
