use actix_web::web;

use crate::handlers::blog_posts;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::get().to(blog_posts::get_all_blog_posts))
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(blog_posts::get_categories))
            )
            .service(
                web::resource("/tags")
                    .route(web::get().to(blog_posts::get_tags))
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(blog_posts::get_blog_post_by_slug))
            )
    );
}
