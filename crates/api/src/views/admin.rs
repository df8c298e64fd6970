//! Admin panel pages.

use bichon_core::dashboard::DashboardStats;
use bichon_core::flash::Flash;
use bichon_core::types::DbId;
use bichon_db::models::post::{Post, PostSummary};
use maud::{html, Markup};

use super::format_date;

/// Login form, optionally with an error banner.
#[derive(Debug, Default)]
pub struct LoginView<'a> {
    pub error: Option<&'a str>,
}

impl LoginView<'_> {
    pub fn render(&self) -> Markup {
        html! {
            div.box.login-box {
                h1 { "Admin Login" }
                @if let Some(error) = self.error {
                    div.alert.alert-error { (error) }
                }
                form method="post" action="/admin/login" {
                    label for="username" { "Username" }
                    input #username type="text" name="username" required autofocus;
                    label for="password" { "Password" }
                    input #password type="password" name="password" required;
                    button.btn type="submit" { "Log in" }
                }
            }
        }
    }
}

/// Dashboard counters and the most recent posts.
#[derive(Debug, Default)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_posts: Vec<PostSummary>,
}

impl DashboardView {
    pub fn render(&self) -> Markup {
        html! {
            h1 { "Dashboard" }
            div.stats {
                div.stat {
                    span.stat-value #stat-total-posts { (self.stats.total_posts) }
                    span.stat-label { "Total posts" }
                }
                div.stat {
                    span.stat-value #stat-recent-posts { (self.stats.recent_posts) }
                    span.stat-label { "Posts this month" }
                }
            }
            section.box {
                h2 { "Recent posts" }
                @if self.recent_posts.is_empty() {
                    p.empty { "No posts yet." }
                } @else {
                    ul.recent-posts {
                        @for post in &self.recent_posts {
                            li {
                                a href=(format!("/admin/posts/edit/{}", post.id)) { (post.title) }
                                " "
                                span.date { (format_date(&post.created_at)) }
                            }
                        }
                    }
                }
                a.btn href="/admin/posts/new" { "New post" }
            }
        }
    }
}

/// All posts with edit/delete controls and an optional flash banner.
#[derive(Debug, Default)]
pub struct PostsListView {
    pub posts: Vec<Post>,
    pub flash: Option<Flash>,
}

impl PostsListView {
    pub fn render(&self) -> Markup {
        html! {
            div.page-header {
                h1 { "Posts" }
                a.btn href="/admin/posts/new" { "New post" }
            }
            @if let Some(flash) = self.flash {
                div id="flash-message" class=(format!("alert alert-{}", flash.kind().as_str())) {
                    (flash.message())
                }
            }
            @if self.posts.is_empty() {
                p.empty { "No posts yet." }
            } @else {
                table.posts-table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Created" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        @for post in &self.posts {
                            tr data-post-id=(post.id) {
                                td { a href=(format!("/post/{}", post.id)) { (post.title) } }
                                td { (format_date(&post.created_at)) }
                                td.actions {
                                    a.btn.btn-small href=(format!("/admin/posts/edit/{}", post.id)) { "Edit" }
                                    form.inline
                                        method="post"
                                        action=(format!("/admin/posts/delete/{}", post.id))
                                        onsubmit="return confirm('Delete this post?');" {
                                        button.btn.btn-small.btn-danger type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create/edit form. Re-rendered with the submitted values on failure.
#[derive(Debug, Default)]
pub struct PostFormView {
    /// `Some` when editing an existing post.
    pub post_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

impl PostFormView {
    pub fn new_post() -> Self {
        Self::default()
    }

    pub fn edit(post: Post) -> Self {
        Self {
            post_id: Some(post.id),
            title: post.title,
            content: post.content,
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.post_id.is_some()
    }

    pub fn page_title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Post"
        } else {
            "New Post"
        }
    }

    fn action(&self) -> String {
        match self.post_id {
            Some(id) => format!("/admin/posts/edit/{id}"),
            None => "/admin/posts/new".to_string(),
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            div.box {
                h1 { (self.page_title()) }
                @if let Some(error) = &self.error {
                    div.alert.alert-error { (error) }
                }
                form method="post" action=(self.action()) {
                    label for="title" { "Title" }
                    input #title type="text" name="title" value=(self.title);
                    label for="content" { "Content" }
                    textarea #content name="content" rows="16" { (self.content) }
                    div.form-actions {
                        button.btn type="submit" {
                            @if self.is_edit() { "Update post" } @else { "Create post" }
                        }
                        a.btn.btn-secondary href="/admin/posts" { "Cancel" }
                    }
                }
            }
        }
    }
}

/// Shell for the browser-side story editor; data arrives over the story API.
pub fn story_editor() -> Markup {
    html! {
        h1 { "Story Editor" }
        div.story-editor {
            aside.story-sidebar {
                label for="file-select" { "Story file" }
                select #file-select {
                    option value="" { "Select a file" }
                }
                ul id="scene-list" class="scene-list" {}
            }
            section.story-main {
                div id="editor-placeholder" class="editor-placeholder" {
                    p { "Select a scene to edit." }
                }
                div id="editor-pane" class="editor-pane" style="display: none" {
                    h2 { "Scene " span #current-scene-id {} }
                    label for="scene-location" { "Location" }
                    input #scene-location type="text";
                    label for="scene-script" { "Script (one line per row)" }
                    textarea #scene-script rows="12" {}
                    label for="scene-actions" { "Actions (one line per row)" }
                    textarea #scene-actions rows="8" {}
                    div.form-actions {
                        button id="save-btn" class="btn" type="button" { "Save Changes" }
                        span id="status-message" class="status-message" {}
                    }
                }
            }
        }
        script src="/js/story-editor.js" {}
    }
}
