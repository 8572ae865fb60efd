//! Plain-text views over the session. Ages are recomputed on every render.

use std::fmt::Write;

use domains::{ChatMessage, Comment, ExpressionPost, JournalEntry, MoodTag, Post, Resource, Sender};
use services::Session;

fn mood(tag: Option<MoodTag>) -> &'static str {
    tag.map_or("  ", MoodTag::emoji)
}

pub fn community_feed(session: &Session) -> String {
    let mut out = String::new();
    for post in session.community.list_posts() {
        let _ = writeln!(out, "{}", post_line(session, post));
    }
    out
}

pub fn post_line(session: &Session, post: &Post) -> String {
    let badge = if post.is_supported() { " [Supported]" } else { "" };
    format!(
        "{} #{} Anonymous · {}{}\n   {}\n   ♥ {}  💬 {}",
        mood(post.mood()),
        post.id(),
        session.age_label(post.created_at()),
        badge,
        post.body(),
        post.reactions(),
        post.comments().len()
    )
}

pub fn thread(session: &Session, comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "   (no comments yet)".to_owned();
    }
    let mut out = String::new();
    for comment in comments {
        let badge = if comment.is_helpful() { " [Helpful]" } else { "" };
        let _ = writeln!(
            out,
            "   #{} Anonymous · {}{}\n     {}\n     ♥ {}",
            comment.id(),
            session.age_label(comment.created_at()),
            badge,
            comment.body(),
            comment.reactions()
        );
    }
    out
}

pub fn expression_feed(session: &Session) -> String {
    let mut out = String::new();
    for post in session.expression.list_posts() {
        let _ = writeln!(out, "{}", expression_line(session, post));
    }
    out
}

pub fn expression_line(session: &Session, post: &ExpressionPost) -> String {
    format!(
        "{} #{} {}\n   ♥ {}  💬 {}  · {}",
        mood(post.mood()),
        post.id(),
        post.body(),
        post.reactions(),
        post.comment_count(),
        session.age_label(post.created_at())
    )
}

pub fn journal(session: &Session) -> String {
    let mut out = String::new();
    let average = session.journal.average_mood();
    let score = session.journal.average_mood_score();
    let stats = session.journal.stats();
    let _ = writeln!(out, "Average mood {} {average:.1}/5", score.emoji());
    let _ = writeln!(
        out,
        "Entries {} · this week {} · streak {} days",
        stats.total_entries, stats.this_week, stats.streak_days
    );
    for entry in session.journal.list_entries() {
        let _ = writeln!(out, "{}", journal_line(entry));
    }
    out
}

pub fn journal_line(entry: &JournalEntry) -> String {
    let tags = if entry.tags().is_empty() {
        String::new()
    } else {
        format!("\n   tags: {}", entry.tags().join(", "))
    };
    format!(
        "{} {} ({})\n   {}{}",
        entry.mood().emoji(),
        entry.title(),
        entry.created_at().format("%a, %b %-d"),
        entry.body(),
        tags
    )
}

pub fn resource_list(resources: &[&Resource]) -> String {
    if resources.is_empty() {
        return "No resources match.".to_owned();
    }
    let mut out = String::new();
    for r in resources {
        let _ = writeln!(
            out,
            "#{} [{}] {} ★{:.1} · {}\n   {}",
            r.id, r.category, r.title, r.rating, r.read_time, r.description
        );
    }
    out
}

pub fn resource_detail(resource: &Resource) -> String {
    let body = match (&resource.content, resource.is_external) {
        (Some(content), _) => content.clone(),
        (None, true) => "External resource, open it in your browser.".to_owned(),
        (None, false) => String::new(),
    };
    format!("{} [{}]\n{}\n\n{}", resource.title, resource.category, resource.description, body)
}

pub fn chat_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Companion => "companion",
    };
    format!("{who}: {}", message.text)
}

pub fn moods() -> String {
    MoodTag::SELECTABLE
        .iter()
        .map(|tag| format!("{} {}", tag.emoji(), tag.label()))
        .collect::<Vec<_>>()
        .join("  ")
}
