use crate::post::post_model::{Author, NewPost, Post};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use chrono::{Duration, Utc};
use log::{info, warn};
use rand::Rng;

const TITLES: [&str; 5] = [
    "Here and Now",
    "Testing Data",
    "Oh No, Hippos!",
    "Title Four",
    "Coding for Animals",
];

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Margaret", "Niklaus",
];

const LAST_NAMES: [&str; 10] = [
    "Lovelace", "Turing", "Liskov", "Ritchie", "Dijkstra", "Allen", "Hopper", "Thompson",
    "Hamilton", "Wirth",
];

const LOREM: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud",
];

/// Number of posts seeded before each test.
pub const SEED_POST_COUNT: usize = 10;

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

pub fn generate_post_title() -> String {
    pick(&mut rand::rng(), &TITLES).to_string()
}

/// A few sentences of lorem ipsum.
pub fn generate_paragraph() -> String {
    let mut rng = rand::rng();
    let sentences = rng.random_range(3..6);

    (0..sentences)
        .map(|_| {
            let words = rng.random_range(4..10);
            let sentence: Vec<&str> = (0..words).map(|_| pick(&mut rng, &LOREM)).collect();
            let sentence = sentence.join(" ");
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random post with a `created` time within the last day.
pub fn generate_post() -> NewPost {
    let mut rng = rand::rng();
    let age = Duration::seconds(rng.random_range(0..86_400));

    NewPost {
        author: Author {
            first_name: pick(&mut rng, &FIRST_NAMES).to_string(),
            last_name: pick(&mut rng, &LAST_NAMES).to_string(),
        },
        title: generate_post_title(),
        content: generate_paragraph(),
        created: Some(Utc::now() - age),
    }
}

pub async fn seed_posts(store: &dyn PostStore, count: usize) -> Result<Vec<Post>, CustomError> {
    info!("seeding blog post data");
    let posts = (0..count).map(|_| generate_post()).collect();
    store.insert_many(posts).await
}

pub async fn tear_down(store: &dyn PostStore) -> Result<(), CustomError> {
    warn!("Tearing down database");
    store.clear().await
}
