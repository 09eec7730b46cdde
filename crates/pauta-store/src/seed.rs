//! Mock seed data loaded at session start.

use chrono::{Duration, NaiveDate, Utc};
use pauta_shared::{CommentAuthor, PostFormat, PostStatus};

use crate::models::{ClientStrategy, Comment, Persona, Post, VisualIdentity};
use crate::store::ContentStore;

/// The initial client strategy.
pub fn initial_strategy() -> ClientStrategy {
    ClientStrategy {
        id: "1".to_string(),
        name: "TechStart Solutions".to_string(),
        persona: Persona {
            pains: "Dificuldade em contratar devs seniores, processos lentos.".to_string(),
            goals: "Ser vista como inovadora e atrair talentos.".to_string(),
            tone: "Profissional, porém acessível e tech-savvy.".to_string(),
        },
        identity: VisualIdentity {
            colors: "#2563EB, #1E293B".to_string(),
            fonts: "Inter, Roboto".to_string(),
            inspiration_url: "pinterest.com/techstart/branding".to_string(),
        },
    }
}

/// The initial post list, dated relative to `today` so the calendar view
/// opens with content in the current month.
pub fn initial_posts(today: NaiveDate) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "5 Dicas de Produtividade".to_string(),
            date: today,
            format: PostFormat::Carousel,
            status: PostStatus::Approval,
            client: "TechStart Solutions".to_string(),
            caption: "Confira essas dicas essenciais para melhorar seu workflow no dia a dia dev."
                .to_string(),
            image_url: None,
            comments: vec![Comment {
                id: "c1".to_string(),
                author: CommentAuthor::Manager,
                text: "Enviado para aprovação.".to_string(),
                timestamp: Utc::now(),
            }],
        },
        Post {
            id: "2".to_string(),
            title: "Bastidores do Escritório".to_string(),
            date: today + Duration::days(2),
            format: PostFormat::Reels,
            status: PostStatus::Draft,
            client: "TechStart Solutions".to_string(),
            caption: String::new(),
            image_url: None,
            comments: Vec::new(),
        },
        Post {
            id: "3".to_string(),
            title: "Lançamento Feature X".to_string(),
            date: today - Duration::days(1),
            format: PostFormat::Static,
            status: PostStatus::Published,
            client: "TechStart Solutions".to_string(),
            caption: "A espera acabou! A Feature X está no ar.".to_string(),
            image_url: None,
            comments: Vec::new(),
        },
    ]
}

impl ContentStore {
    /// A store pre-loaded with the mock strategy and posts.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut store = ContentStore::new(initial_strategy());
        store.posts = initial_posts(today);
        store
    }
}
