//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, catalog, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folium API",
        version = "1.0.0",
        description = "Library catalog JSON API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        catalog::catalog_home,
        catalog::list_books,
        catalog::get_book,
        catalog::list_book_instances,
        catalog::get_book_instance,
        catalog::list_genres,
        catalog::get_genre,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author_form,
        authors::create_author,
        authors::delete_author_form,
        authors::delete_author,
    ),
    components(
        schemas(
            // Authors
            authors::AuthorView,
            authors::BookSummaryView,
            authors::AuthorListView,
            authors::AuthorDetailView,
            authors::AuthorFormView,
            authors::AuthorDeleteView,
            crate::models::author::Author,
            crate::models::author::NewAuthor,
            crate::models::author::AuthorForm,
            crate::models::author::SanitizedAuthorForm,
            // Catalog
            catalog::CatalogCounts,
            catalog::CatalogHomeView,
            catalog::GenreView,
            catalog::InstanceView,
            catalog::BookRef,
            catalog::BookListEntry,
            catalog::BookListView,
            catalog::BookDetailView,
            catalog::InstanceListEntry,
            catalog::InstanceListView,
            catalog::InstanceDetailView,
            catalog::GenreListView,
            catalog::GenreDetailView,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FieldError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Read-only catalog views"),
        (name = "authors", description = "Author lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
