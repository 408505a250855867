use serde::Deserialize;

// discover/movie
//  ├── page
//  ├── results[]
//  │    ├── id
//  │    ├── title
//  │    ├── release_date   ("YYYY-MM-DD", sometimes "")
//  │    ├── poster_path    ("/abc.jpg" or null)
//  │    ├── vote_count
//  │    └── adult
//  ├── total_pages
//  └── total_results

#[derive(Debug, Deserialize)]
pub struct DiscoverPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<DiscoverMovie>,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub adult: bool,
}
