//! Staff discussion threads attached to a submitted chapter

use crate::types::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterComment {
    pub id: String,
    pub chapter_id: String,
    pub user_id: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Comments on one chapter, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentThread {
    chapter_id: String,
    comments: Vec<ChapterComment>,
}

impl CommentThread {
    pub fn new(chapter_id: impl Into<String>) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            comments: Vec::new(),
        }
    }

    /// Collect this chapter's comments out of a mixed list
    pub fn from_comments(
        chapter_id: impl Into<String>,
        comments: impl IntoIterator<Item = ChapterComment>,
    ) -> Self {
        let chapter_id = chapter_id.into();
        let mut comments: Vec<ChapterComment> = comments
            .into_iter()
            .filter(|c| c.chapter_id == chapter_id)
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Self {
            chapter_id,
            comments,
        }
    }

    pub fn chapter_id(&self) -> &str {
        &self.chapter_id
    }

    pub fn comments(&self) -> &[ChapterComment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Add a comment. Text is trimmed; blank text or a missing author is rejected.
    pub fn post(
        &mut self,
        id: impl Into<String>,
        user_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<&ChapterComment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DeskError::Validation("Comment is empty".to_string()));
        }
        if user_id.trim().is_empty() {
            return Err(DeskError::Validation(
                "Comment needs an author".to_string(),
            ));
        }

        let comment = ChapterComment {
            id: id.into(),
            chapter_id: self.chapter_id.clone(),
            user_id: user_id.to_string(),
            comment: text.to_string(),
            created_at: now,
        };

        // After every comment at or before `now`
        let index = self.comments.partition_point(|c| c.created_at <= now);
        self.comments.insert(index, comment);
        Ok(&self.comments[index])
    }

    pub fn into_comments(self) -> Vec<ChapterComment> {
        self.comments
    }
}

/// Split a mixed comment list into per-chapter threads
pub fn threads_by_chapter(comments: Vec<ChapterComment>) -> BTreeMap<String, CommentThread> {
    let mut grouped: BTreeMap<String, Vec<ChapterComment>> = BTreeMap::new();
    for comment in comments {
        grouped
            .entry(comment.chapter_id.clone())
            .or_default()
            .push(comment);
    }
    grouped
        .into_iter()
        .map(|(chapter_id, comments)| {
            let thread = CommentThread::from_comments(chapter_id.clone(), comments);
            (chapter_id, thread)
        })
        .collect()
}
