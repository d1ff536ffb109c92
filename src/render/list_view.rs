use maud::html;

use crate::post::post_model::Post;
use crate::render::html::{excerpt, format_date};
use crate::render::{page, tag_spans};

/// Render the list page. The total count is always shown, including
/// zero; an empty store gets a dedicated no-posts fragment.
pub fn render_list(base_url: &str, posts: &[Post]) -> String {
    let body = html! {
        header {
            h1 { a href={ (base_url) "/blog" } { "Blog" } }
            div class="total-posts" { "Total posts: " (posts.len()) }
        }
        @if posts.is_empty() {
            div class="no-posts" { "No blog posts yet. Create the first one above!" }
        } @else {
            @for post in posts {
                div class="blog-post" {
                    h2 { a href={ "blog/" (post.id) } { (post.title) } }
                    div class="blog-meta" {
                        "By " (post.author)
                        " • " (format_date(&post.created_at))
                        " • "
                        @if post.images.is_empty() {
                            "No images"
                        } @else {
                            (post.images.len()) " image(s)"
                        }
                    }
                    div class="blog-excerpt" { (excerpt(&post.content)) }
                    @if !post.tags.is_empty() {
                        div class="blog-tags" { (tag_spans(&post.tags)) }
                    }
                }
            }
        }
    };
    page("Blog", body)
}
