// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{assessment, auth, blogs, careers, chatbot, colleges, contact, mentor, profile, roadmaps},
    state::AppState,
    utils::jwt::{auth_middleware, mentor_middleware},
};

/// Assembles the main application router.
///
/// * Every endpoint lives under `/api`.
/// * Anything else is served from `STATIC_DIR` (the front-end).
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let require_auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/profile",
            get(profile::get_profile).route_layer(require_auth.clone()),
        );

    let catalog_routes = Router::new()
        .route("/careers", get(careers::list_careers))
        .route("/careers/{level}", get(careers::list_careers_by_level))
        .route("/colleges", get(colleges::list_colleges))
        .route("/colleges/{region}", get(colleges::list_colleges_by_region))
        .route("/college/{id}", get(colleges::get_college));

    let roadmap_routes = Router::new()
        .route("/roadmaps", get(roadmaps::list_roadmaps))
        // Static segment wins over the `{career_title}` capture
        .route(
            "/roadmaps/personalized",
            post(roadmaps::personalized_roadmap).merge(
                get(roadmaps::personalized_roadmap_query).route_layer(require_auth.clone()),
            ),
        )
        .route("/roadmaps/{career_title}", get(roadmaps::get_roadmap_by_title));

    let assessment_routes = Router::new()
        .route("/assessment/questions", get(assessment::list_questions))
        .route("/assessment/evaluate", post(assessment::evaluate))
        .route(
            "/assessment/history",
            get(assessment::history).route_layer(require_auth.clone()),
        );

    let blog_routes = Router::new()
        .route("/blogs", get(blogs::list_blogs))
        .route("/blogs/{id}", get(blogs::get_blog))
        .route("/blogs/{id}/like", post(blogs::like_blog));

    // Auth first, then the mentor role check
    let mentor_routes = Router::new()
        .route(
            "/mentor/questions",
            get(mentor::list_questions)
                .merge(post(mentor::ask_question).route_layer(require_auth.clone())),
        )
        .route(
            "/mentor/questions/{id}/answer",
            post(mentor::answer_question)
                .route_layer(middleware::from_fn(mentor_middleware))
                .route_layer(require_auth),
        );

    let misc_routes = Router::new()
        .route("/chatbot", post(chatbot::chat))
        .route("/contact", post(contact::submit_contact));

    let api = Router::new()
        .merge(auth_routes)
        .merge(catalog_routes)
        .merge(roadmap_routes)
        .merge(assessment_routes)
        .merge(blog_routes)
        .merge(mentor_routes)
        .merge(misc_routes);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", api)
        .fallback_service(static_files)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
