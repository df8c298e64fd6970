//! Public blog pages.

use bichon_db::models::post::Post;
use maud::{html, Markup};

use super::format_date;

/// Characters of content shown per post on the home page.
const EXCERPT_CHARS: usize = 200;

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}

/// Paragraphs separated by blank lines.
fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Home page: every post, newest first.
#[derive(Debug, Default)]
pub struct IndexView {
    pub posts: Vec<Post>,
}

impl IndexView {
    pub fn render(&self) -> Markup {
        html! {
            h1 { "Latest posts" }
            @if self.posts.is_empty() {
                p.empty { "No posts yet." }
            }
            @for post in &self.posts {
                article.post-card {
                    h2 { a href=(format!("/post/{}", post.id)) { (post.title) } }
                    p.date { (format_date(&post.created_at)) }
                    p { (excerpt(&post.content)) }
                    a.read-more href=(format!("/post/{}", post.id)) { "Read more" }
                }
            }
        }
    }
}

/// A single post.
#[derive(Debug)]
pub struct PostView {
    pub post: Post,
}

impl PostView {
    pub fn render(&self) -> Markup {
        html! {
            article.post {
                h1 { (self.post.title) }
                p.date { (format_date(&self.post.created_at)) }
                div.post-content {
                    @for paragraph in paragraphs(&self.post.content) {
                        p { (paragraph) }
                    }
                }
                a href="/" { "Back to all posts" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_not_truncated() {
        assert_eq!(excerpt("hello"), "hello");
    }

    #[test]
    fn long_content_is_cut_on_char_boundary() {
        let content = "é".repeat(EXCERPT_CHARS + 10);
        let cut = excerpt(&content);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let parts: Vec<_> = paragraphs("one\n\n\n\ntwo\nstill two\n\n").collect();
        assert_eq!(parts, vec!["one", "two\nstill two"]);
    }
}
