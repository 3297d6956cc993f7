use actix_web::{web, HttpResponse, Responder};

use crate::cache::{SolveCache, SolveKey};
use crate::config::AppConfig;
use crate::domain::reestimate::{reestimate, RhsChange};
use crate::domain::solution::SimplexResult;
use crate::domain::solver::Solver;
use crate::domain::solver_factory::create_solver;
use crate::domain::tableau::{create_tableau, Direction, Tableau};
use crate::error::ApiFailure;
use crate::models::{
    ApiReestimate, ApiSolution, ApiTableau, ReestimateRequest, SolveRequest, TableauRequest,
};

/// Shared by every worker. The solver is stateless; the cache locks internally.
pub struct AppState {
    pub solver: Box<dyn Solver>,
    pub cache: SolveCache,
    pub max_variables: usize,
    pub max_constraints: usize,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        AppState {
            solver: create_solver(config.solver, config.max_iterations),
            cache: SolveCache::new(config.cache_capacity),
            max_variables: config.max_variables,
            max_constraints: config.max_constraints,
        }
    }

    fn check_size(&self, num_vars: usize, num_constraints: usize) -> Result<(), ApiFailure> {
        if !(1..=self.max_variables).contains(&num_vars) {
            return Err(ApiFailure::OutOfRange(format!(
                "number of variables must be between 1 and {}, got {}",
                self.max_variables, num_vars,
            )));
        }
        if !(1..=self.max_constraints).contains(&num_constraints) {
            return Err(ApiFailure::OutOfRange(format!(
                "number of constraints must be between 1 and {}, got {}",
                self.max_constraints, num_constraints,
            )));
        }
        Ok(())
    }

    fn solve_cached(&self, tableau: &Tableau, direction: Direction) -> Result<SimplexResult, ApiFailure> {
        let key = SolveKey::new(self.solver.name(), tableau, direction);
        if let Some(hit) = self.cache.get(&key) {
            log::debug!("Cache hit for {}x{} tableau", tableau.num_constraints(), tableau.num_variables());
            return Ok(hit);
        }

        let result = self.solver.solve(tableau, direction).map_err(|e| {
            log::info!("{} failed: {}", self.solver.name(), e);
            e
        })?;
        self.cache.put(key, result.clone());
        Ok(result)
    }
}

// ---------- Route handlers ----------

/// POST /tableau
pub async fn build_tableau(
    state: web::Data<AppState>,
    req: web::Json<TableauRequest>,
) -> Result<HttpResponse, ApiFailure> {
    state.check_size(req.num_vars, req.num_constraints)?;

    let tableau = create_tableau(req.num_vars, req.num_constraints, req.direction.into());
    Ok(HttpResponse::Ok().json(ApiTableau::from(tableau)))
}

/// POST /solve
pub async fn solve(
    state: web::Data<AppState>,
    req: web::Json<SolveRequest>,
) -> Result<HttpResponse, ApiFailure> {
    let SolveRequest { tableau, direction } = req.into_inner();
    let tableau = Tableau::from(tableau);

    state.check_size(tableau.num_variables(), tableau.num_constraints())?;

    let result = state.solve_cached(&tableau, direction.into())?;
    Ok(HttpResponse::Ok().json(ApiSolution::from(result)))
}

/// POST /reestimate
pub async fn reestimate_profit(req: web::Json<ReestimateRequest>) -> impl Responder {
    let ReestimateRequest { result, changes } = req.into_inner();
    let result = SimplexResult::from(result);
    let changes: Vec<RhsChange> = changes.into_iter().map(|c| c.into()).collect();

    let estimate = reestimate(&result, &changes);
    HttpResponse::Ok().json(ApiReestimate::from(estimate))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

/// Malformed JSON becomes a 400 with an `error` field instead of actix's plain text.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
            )
            .into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/tableau", web::post().to(build_tableau))
        .route("/solve", web::post().to(solve))
        .route("/reestimate", web::post().to(reestimate_profit))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}
