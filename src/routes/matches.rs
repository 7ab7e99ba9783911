use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::Settings;
use crate::core::{calculate_match_score, match_category, recommend_jobs};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendJobsRequest, RecommendJobsResponse, RecommendedJob,
    ScoreMatchRequest, ScoreMatchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one candidate/posting pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "candidate": { "skills": [...], "experience": [...], "location": "...", "education": [...] },
///   "job": { "requiredSkills": [...], "requiredExperience": 3, ... }
/// }
/// ```
async fn score_match(req: web::Json<ScoreMatchRequest>) -> impl Responder {
    let match_score = calculate_match_score(&req.candidate, &req.job);
    let category = match_category(match_score);

    tracing::debug!(
        "Scored candidate against job {:?}: {} ({})",
        req.job.id,
        match_score,
        category.label
    );

    HttpResponse::Ok().json(ScoreMatchResponse {
        match_score,
        category,
    })
}

/// Rank a batch of postings for a candidate
///
/// POST /api/v1/matches/recommend
///
/// Request body:
/// ```json
/// {
///   "candidate": { ... },
///   "jobs": [ { ... }, ... ],
///   "limit": 20
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let matching = &state.settings.matching;
    // Cap limit to keep response sizes bounded
    let limit = req
        .limit
        .unwrap_or(matching.default_limit)
        .min(matching.max_limit) as usize;

    let req = req.into_inner();
    let total_submitted = req.jobs.len();

    tracing::info!(
        "Ranking {} jobs for candidate, limit: {}",
        total_submitted,
        limit
    );

    let result = recommend_jobs(&req.candidate, req.jobs, Some(limit));

    let matches: Vec<RecommendedJob> = result
        .matches
        .into_iter()
        .map(|scored| RecommendedJob {
            category: match_category(scored.match_score),
            match_score: scored.match_score,
            job: scored.job,
        })
        .collect();

    tracing::info!(
        "Returning {} matches (from {} jobs)",
        matches.len(),
        result.total_jobs
    );

    HttpResponse::Ok().json(RecommendJobsResponse {
        matches,
        total_jobs: result.total_jobs,
    })
}
