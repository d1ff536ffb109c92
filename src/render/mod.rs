//! Typed HTML rendering for the two blog views.
//!
//! Each view is a single function over a typed model; escaping of user
//! text is structural (maud escapes all interpolated strings), so there
//! is no substitution ordering to get wrong.

pub mod html;
pub mod list_view;
pub mod post_view;

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Inline CSS shared by both views.
const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:#222;background:#fafafa;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%}
a{color:#0a66c2;text-decoration:none}
a:hover{text-decoration:underline}
header{margin-bottom:2rem}
header h1{font-size:1.75rem}
.total-posts{color:#777;font-size:.9rem}
.blog-post{background:#fff;border:1px solid #e4e4e4;border-radius:8px;padding:1.25rem;margin-bottom:1rem}
.blog-post h2{font-size:1.2rem;margin-bottom:.25rem}
.blog-meta{color:#777;font-size:.85rem;margin-bottom:.6rem}
.blog-excerpt{white-space:pre-wrap;word-break:break-word}
.blog-tags,.post-tags{margin-top:.6rem}
.tag{display:inline-block;background:#eef3f8;color:#0a66c2;font-size:.78rem;padding:.15rem .6rem;border-radius:100px;margin-right:.35rem}
.no-posts{color:#777;text-align:center;padding:2rem 0}
.post-content{white-space:pre-wrap;word-break:break-word;margin:1rem 0}
.post-images{margin-top:1.5rem}
.image-gallery{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem;margin-top:.75rem}
.image-item img{width:100%;border-radius:6px;display:block}
.image-info{color:#777;font-size:.8rem;margin-top:.25rem}
.post-not-found{text-align:center;padding:2rem 0}
.back-link{display:inline-block;margin-top:1.5rem}
"#;

/// Full-page skeleton wrapped around a view body.
fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body) }
            }
        }
    }
    .into_string()
}

fn tag_spans(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            span class="tag" { (tag) }
        }
    }
}
