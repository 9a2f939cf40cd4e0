use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, listing::BlogListParams, AppState};

#[instrument(skip(state))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogListParams>,
) -> Result<impl Responder, AppError> {
    let post_query = query.into_inner().into_query(state.listing_limits)?;

    let response = state.blog_handler
        .list_blog_posts(&post_query)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler
        .get_blog_post_by_slug(&slug)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state))]
pub async fn get_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let categories = state.blog_handler.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[instrument(skip(state))]
pub async fn get_tags(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let tags = state.blog_handler.list_tags().await?;
    Ok(HttpResponse::Ok().json(tags))
}
