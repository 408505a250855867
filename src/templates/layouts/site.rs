use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;700&display=swap";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { h1 { "Tardy Critic" } }
                    nav {
                        ul {
                            li { a href="/" { "Reviews" } }
                            li { a href="/about" { "About" } }
                        }
                    }
                }
                main class="site-main" {
                    (content)
                }
                footer class="site-footer" {
                    p {
                        "Reviews from "
                        a href="https://letterboxd.com/tardycritic/" { "Letterboxd" }
                        ". Anniversary data from "
                        a href="https://www.themoviedb.org/" { "TMDB" }
                        "."
                    }
                }
            }
        }
    }
}
