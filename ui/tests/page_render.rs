//! End-to-end render of the landing page through `dioxus-ssr`.

use dioxus::prelude::*;
use ui::catalog;
use ui::i18n;
use ui::views::Home;

fn render_home() -> String {
    i18n::set_language(i18n::FALLBACK_LANGUAGE).unwrap();
    let mut dom = VirtualDom::new(Home);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Debug)]
struct Card<'a> {
    title: &'a str,
    rows: Vec<Row<'a>>,
}

#[derive(Debug)]
struct Row<'a> {
    title: &'a str,
    target: &'a str,
}

fn text_after<'a>(chunk: &'a str, marker: &str) -> &'a str {
    let start = chunk.find(marker).unwrap_or_else(|| panic!("{marker} not found")) + marker.len();
    let start = chunk[start..].find('>').unwrap() + start + 1;
    let end = chunk[start..].find('<').unwrap() + start;
    &chunk[start..end]
}

fn attr<'a>(chunk: &'a str, name: &str) -> &'a str {
    let marker = format!("{name}=\"");
    let start = chunk.find(&marker).unwrap() + marker.len();
    let end = chunk[start..].find('"').unwrap() + start;
    &chunk[start..end]
}

fn cards(html: &str) -> Vec<Card<'_>> {
    html.split("class=\"group-card\"")
        .skip(1)
        .map(|card| Card {
            title: text_after(card, "class=\"group-card__title\""),
            rows: card
                .split("<a ")
                .skip(1)
                .filter(|row| row.contains("class=\"link-row\""))
                .map(|row| Row {
                    title: text_after(row, "class=\"link-row__title\""),
                    target: attr(row, "href"),
                })
                .collect(),
        })
        .collect()
}

#[test]
fn renders_four_cards_in_order() {
    let html = render_home();
    let titles: Vec<_> = cards(&html).iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Web Apps", "Communities", "Papers", "Brands"]);
}

#[test]
fn web_apps_card_starts_with_monroe() {
    let html = render_home();
    let cards = cards(&html);
    let web_apps = &cards[0];
    assert_eq!(web_apps.rows.len(), 3);
    assert_eq!(web_apps.rows[0].title, "Monroe™");
    assert_eq!(web_apps.rows[0].target, "https://www.monroe.art");
}

#[test]
fn papers_card_ends_with_the_whitepaper() {
    let html = render_home();
    let cards = cards(&html);
    let papers = &cards[2];
    assert_eq!(papers.rows.len(), 6);
    assert_eq!(
        papers.rows.last().map(|r| r.title),
        Some("Explaining Higher Network")
    );
}

#[test]
fn row_count_and_order_follow_the_catalog() {
    let html = render_home();
    let cards = cards(&html);
    assert_eq!(cards.len(), catalog::groups().len());

    for (card, group) in cards.iter().zip(catalog::groups()) {
        let rendered: Vec<_> = card.rows.iter().map(|r| r.target).collect();
        let expected: Vec<_> = group.links.iter().map(|l| l.target).collect();
        assert_eq!(rendered, expected, "rows of {}", group.title);
    }
}

#[test]
fn each_row_links_only_to_its_own_target() {
    let html = render_home();
    let cards = cards(&html);
    let meme_maker = cards
        .iter()
        .flat_map(|c| c.rows.iter())
        .filter(|r| r.title == "Meme Maker")
        .collect::<Vec<_>>();
    assert_eq!(meme_maker.len(), 1);
    assert_eq!(meme_maker[0].target, "https://www.makememes.co");

    // Rows are separate anchors: none is nested inside another.
    let rows = html.matches("class=\"link-row\"").count();
    assert_eq!(rows, 15);
    assert_eq!(html.matches("<a ").count(), rows + 1);
    assert_eq!(html.matches("</a>").count(), rows + 1);
}

#[test]
fn page_sits_inside_the_frame() {
    let html = render_home();
    let nav = html.find("<nav").unwrap();
    let main = html.find("<main").unwrap();
    let grid = html.find("class=\"catalog-grid\"").unwrap();
    assert!(nav < main && main < grid);
    assert!(html.contains(">Projects by PRXM</h1>"));
}
