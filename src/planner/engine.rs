use log::info;

use crate::catalog::CatalogSnapshot;
use crate::error::{PlannerError, Result};
use crate::models::{
    ApiRequest, CustomConfig, GenerateRequest, GenerateResponse, MealPlan, OptimizeRequest,
    OptimizeResponse, PlanMode, PlanStatistics,
};
use crate::planner::generator::generate_plan;
use crate::planner::keywords::KeywordTable;
use crate::planner::optimizer::optimize_plan;
use crate::planner::pool::{CandidatePool, ExclusionFallback};
use crate::planner::random::RandomSource;
use crate::planner::season::Season;
use crate::planner::statistics::{compare_plans, plan_statistics};
use crate::planner::strategies::{PlanningContext, SelectionStrategy, StrategyRegistry};

/// Knobs that are not part of a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerOptions {
    /// Fixed season, `None` to read the local clock per request.
    pub season: Option<Season>,
    pub exclusion_fallback: ExclusionFallback,
}

/// Request entry point over one catalog snapshot.
///
/// Holds no per-request state; the used-recipe set and tie-breaks live in
/// each call.
pub struct MenuPlanner {
    snapshot: CatalogSnapshot,
    keywords: KeywordTable,
    registry: StrategyRegistry,
    options: PlannerOptions,
}

impl MenuPlanner {
    pub fn new(snapshot: CatalogSnapshot, keywords: KeywordTable) -> Self {
        Self {
            snapshot,
            keywords,
            registry: StrategyRegistry::default(),
            options: PlannerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PlannerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn season(&self) -> Season {
        self.options.season.unwrap_or_else(Season::current)
    }

    fn context<'a>(&'a self, custom: Option<&'a CustomConfig>) -> PlanningContext<'a> {
        PlanningContext {
            snapshot: &self.snapshot,
            keywords: &self.keywords,
            season: self.season(),
            custom,
        }
    }

    fn pool(&self, custom: Option<&CustomConfig>) -> Result<CandidatePool<'_>> {
        CandidatePool::build(
            &self.snapshot,
            custom.map(|c| &c.exclusions),
            &self.keywords,
            self.options.exclusion_fallback,
        )
    }

    fn strategy(&self, mode: PlanMode) -> Result<&dyn SelectionStrategy> {
        self.registry
            .get(mode)
            .ok_or_else(|| PlannerError::InvalidInput(format!("No strategy for mode '{}'", mode)))
    }

    /// Fill the empty slots of the request's plan.
    pub fn generate(
        &self,
        request: &GenerateRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<GenerateResponse> {
        let custom = request.custom_config.as_ref();
        let pool = self.pool(custom)?;
        let strategy = self.strategy(request.mode)?;
        let ctx = self.context(custom);

        info!(
            "Generating week {} with {} ({} candidates, {} excluded, season {})",
            request.week_number,
            request.mode,
            pool.recipes().len(),
            pool.excluded(),
            ctx.season
        );

        let generated = generate_plan(&request.current_plan, &pool, strategy, &ctx, rng);
        let statistics = plan_statistics(&generated.plan, &self.snapshot);

        info!(
            "Filled {} slots, kept {}, total cost {:.2}",
            generated.filled, generated.kept, statistics.total_cost
        );

        Ok(GenerateResponse {
            success: true,
            mode: request.mode,
            week_number: request.week_number,
            message: format!(
                "Meal plan for week {} generated with {} ({} new meals)",
                request.week_number,
                request.mode.label().to_lowercase(),
                generated.filled
            ),
            meal_plan: generated.plan,
            statistics,
            exclusion_fallback_used: pool.fallback_used(),
        })
    }

    /// Replace under-performing entries of the request's plan.
    pub fn optimize(
        &self,
        request: &OptimizeRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<OptimizeResponse> {
        let custom = request.custom_config.as_ref();
        let pool = self.pool(custom)?;
        let ctx = self.context(custom);

        info!(
            "Optimizing week {} for {} ({} filled slots)",
            request.week_number,
            request.mode,
            request.current_plan.len()
        );

        let optimized = optimize_plan(&request.current_plan, request.mode, &pool, &ctx, rng);
        let statistics = plan_statistics(&optimized.plan, &self.snapshot);
        let improvements = compare_plans(&request.current_plan, &optimized.plan, &self.snapshot);

        info!(
            "{} replacements, cost reduction {:.1}%",
            optimized.suggestions.len(),
            improvements.cost_reduction
        );

        Ok(OptimizeResponse {
            success: true,
            mode: request.mode,
            week_number: request.week_number,
            message: format!("{} optimizations applied", optimized.suggestions.len()),
            meal_plan: optimized.plan,
            suggestions: optimized.suggestions,
            statistics,
            improvements,
        })
    }

    pub fn statistics(&self, plan: &MealPlan) -> PlanStatistics {
        plan_statistics(plan, &self.snapshot)
    }

    /// Run either request and serialize its response.
    pub fn handle(
        &self,
        request: &ApiRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<serde_json::Value> {
        let value = match request {
            ApiRequest::Generate(req) => serde_json::to_value(self.generate(req, rng)?)?,
            ApiRequest::Optimize(req) => serde_json::to_value(self.optimize(req, rng)?)?,
        };
        Ok(value)
    }
}
