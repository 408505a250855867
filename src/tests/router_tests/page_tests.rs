use super::{body_string, get, request};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{discover_movie, sample_feed, test_loader, FixtureSource};
use http::Method;

#[test]
fn home_page_renders_latest_review_anniversaries_and_grid() {
    let loader = test_loader(FixtureSource::new(
        Some(sample_feed()),
        Some(vec![
            discover_movie(1, "2014-05-15", 4000),
            discover_movie(2, "2014-06-20", 4000),
        ]),
    ));

    let resp = handle(get("/"), &loader).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);

    // Featured panel is the most recently watched film.
    let panel_start = body.find("latest-review").expect("latest review panel");
    let grid_start = body.find("poster-grid").expect("poster grid");
    assert!(body[panel_start..grid_start].contains("Whiplash (2014)"));
    assert!(body.contains("Not quite my tempo."));
    assert!(body.contains("★★★★½"));

    // Anniversaries land in the right lists.
    assert!(body.contains("Ten years ago today"));
    assert!(body.contains("Anniversary 1"));
    assert!(body.contains("Anniversary 2"));
    assert!(body.contains("https://img.test/w342/poster-1.jpg"));

    // Grid order follows watched date, newest first.
    let grid = &body[grid_start..];
    let whiplash = grid.find("Whiplash (2014)").unwrap();
    let boyhood = grid.find("Boyhood (2014)").unwrap();
    let nightcrawler = grid.find("Nightcrawler (2014)").unwrap();
    assert!(whiplash < boyhood && boyhood < nightcrawler);
}

#[test]
fn home_page_renders_when_every_upstream_is_down() {
    let loader = test_loader(FixtureSource::new(None, None));

    let resp = handle(get("/"), &loader).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("No reviews to show right now."));
    assert!(body.contains("Nothing turns ten today."));
    assert!(!body.contains("latest-review"));
}

#[test]
fn home_page_renders_with_malformed_feed() {
    let loader = test_loader(FixtureSource::new(Some("<rss><oops".to_string()), None));

    let resp = handle(get("/"), &loader).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No reviews to show right now."));
}

#[test]
fn about_page_loads() {
    let loader = test_loader(FixtureSource::new(None, None));

    let resp = handle(get("/about"), &loader).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<title>About Tardy Critic</title>"));
    assert!(body.contains("ten years after their release"));
}

#[test]
fn stylesheet_is_served() {
    let loader = test_loader(FixtureSource::new(None, None));

    let resp = handle(get("/static/main.css"), &loader).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".poster-grid"));
}

#[test]
fn unknown_path_is_not_found() {
    let loader = test_loader(FixtureSource::new(None, None));

    let err = handle(get("/films/missing"), &loader).unwrap_err();
    assert_eq!(err.status(), 404);

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn post_to_known_route_is_method_not_allowed() {
    let loader = test_loader(FixtureSource::new(None, None));

    let err = handle(request(Method::POST, "/"), &loader).unwrap_err();

    assert_eq!(err.status(), 405);
    assert_eq!(error_to_response(err).status(), 405);
}
