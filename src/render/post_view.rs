use maud::html;

use crate::post::post_model::Post;
use crate::render::html::format_date;
use crate::render::{page, tag_spans};

/// Render the detail page for an existing post. Content is shown in
/// full; only the list view truncates.
pub fn render_post(base_url: &str, post: &Post) -> String {
    let body = html! {
        article {
            h1 { (post.title) }
            div class="blog-meta" {
                "By " (post.author)
                " • Created " (format_date(&post.created_at))
                " • Updated " (format_date(&post.updated_at))
                " • Post ID: " (post.id)
            }
            div class="post-content" { (post.content) }
            @if !post.images.is_empty() {
                div class="post-images" {
                    h3 { "Images (" (post.images.len()) ")" }
                    div class="image-gallery" {
                        @for image in &post.images {
                            div class="image-item" {
                                img src=(image.url) alt=(image.original_name) loading="lazy";
                                div class="image-info" {
                                    p { strong { "Name: " } (image.original_name) }
                                    p { strong { "Uploaded: " } (format_date(&image.uploaded_at)) }
                                }
                            }
                        }
                    }
                }
            }
            @if !post.tags.is_empty() {
                div class="post-tags" {
                    h3 { "Tags" }
                    (tag_spans(&post.tags))
                }
            }
        }
        a class="back-link" href={ (base_url) "/blog" } { "← Back to Blog" }
    };
    page(&post.title, body)
}

/// Render the not-found variant of the detail page: still a complete,
/// valid page, with the requested id echoed (escaped) and no metadata.
pub fn render_post_not_found(base_url: &str, id: &str) -> String {
    let body = html! {
        div class="post-not-found" {
            h2 { "Blog Post Not Found" }
            p { "The post with ID \"" (id) "\" could not be found." }
        }
        a class="back-link" href={ (base_url) "/blog" } { "← Back to Blog" }
    };
    page("Post Not Found", body)
}
