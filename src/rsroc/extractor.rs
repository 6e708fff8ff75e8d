use super::model::{EventField, EventFields, EventLink};
use lazy_static::lazy_static;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, warn};

const DETAIL_ROWS_SELECTOR: &str = ".articleContent table tr";
const HEADER_CELL_SELECTOR: &str = "th";
const DATA_CELL_SELECTOR: &str = "td";
const CAPTION_SELECTOR: &str = "caption";
const EVENT_LINK_SELECTOR: &str = ".eventLink";
const EVENT_LABEL_SELECTOR: &str = ".event";

const EDUCATION_POINTS_SUFFIX: &str = "放射診斷科專科醫師";

lazy_static! {
    static ref DETAIL_ROWS: Selector =
        Selector::parse(DETAIL_ROWS_SELECTOR).expect("Invalid detail rows selector");
    static ref HEADER_CELL: Selector =
        Selector::parse(HEADER_CELL_SELECTOR).expect("Invalid header cell selector");
    static ref DATA_CELL: Selector =
        Selector::parse(DATA_CELL_SELECTOR).expect("Invalid data cell selector");
    static ref CAPTION: Selector =
        Selector::parse(CAPTION_SELECTOR).expect("Invalid caption selector");
    static ref EVENT_LINK: Selector =
        Selector::parse(EVENT_LINK_SELECTOR).expect("Invalid event link selector");
    static ref EVENT_LABEL: Selector =
        Selector::parse(EVENT_LABEL_SELECTOR).expect("Invalid event label selector");
}

/// Where the value of a labeled row comes from
enum ValueSource {
    DataCell,
    /// The organizer row names the society, the caption carries the event's title
    Caption,
}

struct LabelRule {
    label: &'static str,
    field: EventField,
    source: ValueSource,
    strip: Option<&'static str>,
}

const fn rule(label: &'static str, field: EventField) -> LabelRule {
    LabelRule {
        label,
        field,
        source: ValueSource::DataCell,
        strip: None,
    }
}

static LABEL_RULES: [LabelRule; 7] = [
    rule("日期", EventField::EventDateTime),
    LabelRule {
        source: ValueSource::Caption,
        ..rule("主辦單位", EventField::EventTitle)
    },
    rule("地點", EventField::EventLocation),
    rule("內容", EventField::EventContent),
    LabelRule {
        strip: Some(EDUCATION_POINTS_SUFFIX),
        ..rule("教育積點", EventField::EducationPoints)
    },
    rule("認定時數", EventField::RecognizedHours),
    rule("聯絡", EventField::ContactInfo),
];

impl LabelRule {
    fn read(&self, document: &Html, row: ElementRef) -> Option<String> {
        let value = match self.source {
            ValueSource::DataCell => row.select(&DATA_CELL).next(),
            ValueSource::Caption => document.select(&CAPTION).next(),
        }
        .map(element_text)?;

        Some(match self.strip.and_then(|suffix| value.strip_suffix(suffix)) {
            Some(stripped) => stripped.trim_end().to_string(),
            None => value,
        })
    }
}

/// Reads the labeled rows of a detail page's content table.
///
/// A row matches a label when its header cell contains it. When a label shows
/// up on more than one row the last row wins.
#[tracing::instrument(skip_all)]
pub fn extract_fields(document: &Html) -> EventFields {
    let mut fields = EventFields::default();
    let mut assigned = HashSet::new();

    for row in document.select(&DETAIL_ROWS) {
        let Some(header) = row.select(&HEADER_CELL).next() else {
            continue;
        };
        let header_text = header.text().collect::<String>();

        for rule in LABEL_RULES
            .iter()
            .filter(|rule| header_text.contains(rule.label))
        {
            let Some(value) = rule.read(document, row) else {
                debug!("Row '{}' has no value, skipping", header_text.trim());
                continue;
            };

            if !assigned.insert(rule.field) {
                warn!(
                    "Label '{}' matched more than one row, keeping the last one",
                    rule.label
                );
            }

            fields.set(rule.field, value);
        }
    }

    fields
}

/// Finds the detail page links on the calendar listing page
#[tracing::instrument(skip(document))]
pub fn extract_event_links(document: &Html, base_url: &Url) -> Vec<EventLink> {
    document
        .select(&EVENT_LINK)
        .filter_map(|anchor| {
            let Some(href) = anchor.value().attr("href") else {
                warn!("Event link without href (skipping)");
                return None;
            };

            match base_url.join(href) {
                Ok(url) => Some(EventLink {
                    url,
                    label: anchor
                        .select(&EVENT_LABEL)
                        .next()
                        .map(element_text)
                        .unwrap_or_default(),
                }),
                Err(err) => {
                    warn!("Invalid event link '{}' (skipping). Err: {err}", href);
                    None
                }
            }
        })
        .collect()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_page(rows: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="articleContent"><table>{}</table></div></body></html>"#,
            rows
        ))
    }

    #[test_log::test]
    fn should_read_the_first_data_cell_of_a_labeled_row() {
        let document = detail_page(
            "<tr><th>地點</th><td>  台大醫院國際會議中心  </td><td>ignored</td></tr>",
        );

        let fields = extract_fields(&document);

        assert_eq!(fields.event_location, "台大醫院國際會議中心");
    }

    #[test_log::test]
    fn should_match_labels_with_surrounding_annotation() {
        let document = detail_page("<tr><th>【認定時數】(小時)</th><td>3</td></tr>");

        let fields = extract_fields(&document);

        assert_eq!(fields.recognized_hours, "3");
    }

    #[test_log::test]
    fn when_a_labeled_row_has_no_data_cell_should_leave_the_field_empty() {
        let document = detail_page("<tr><th>聯絡資訊</th></tr>");

        let fields = extract_fields(&document);

        assert_eq!(fields.contact_info, "");
    }

    #[test_log::test]
    fn should_strip_the_education_points_boilerplate() {
        let document = detail_page("<tr><th>教育積點</th><td>1點放射診斷科專科醫師</td></tr>");

        let fields = extract_fields(&document);

        assert_eq!(fields.education_points, "1點");
    }

    #[test_log::test]
    fn should_only_strip_the_boilerplate_at_the_end() {
        let document = detail_page(
            "<tr><th>教育積點</th><td>1點放射診斷科專科醫師、2點核子醫學科</td></tr>",
        );

        let fields = extract_fields(&document);

        assert_eq!(fields.education_points, "1點放射診斷科專科醫師、2點核子醫學科");
    }

    #[test_log::test]
    fn when_a_label_appears_twice_should_keep_the_last_row() {
        let document = detail_page(
            "<tr><th>地點</th><td>第一會議室</td></tr><tr><th>地點(備註)</th><td>第二會議室</td></tr>",
        );

        let fields = extract_fields(&document);

        assert_eq!(fields.event_location, "第二會議室");
    }

    #[test_log::test]
    fn when_there_is_no_caption_should_leave_the_title_empty() {
        let document = detail_page("<tr><th>主辦單位</th><td>台灣放射線醫學會</td></tr>");

        let fields = extract_fields(&document);

        assert_eq!(fields.event_title, "");
    }

    #[test_log::test]
    fn rows_outside_the_article_content_should_be_ignored() {
        let document = Html::parse_document(
            r#"<table><tr><th>地點</th><td>側欄</td></tr></table>
               <div class="articleContent"><table><tr><th>內容</th><td>乳房影像</td></tr></table></div>"#,
        );

        let fields = extract_fields(&document);

        assert_eq!(fields.event_location, "");
        assert_eq!(fields.event_content, "乳房影像");
    }

    #[test_log::test]
    fn should_resolve_listing_links_against_the_listing_url() {
        let document = Html::parse_document(
            r#"<a class="eventLink" href="detail.php?id=12"><div class="event"> 春季研討會 </div></a>
               <a class="eventLink"><div class="event">no href</div></a>
               <a class="eventLink" href="https://other.example/x"></a>"#,
        );
        let base_url = Url::parse("https://www.rsroc.org.tw/action/").unwrap();

        let links = extract_event_links(&document, &base_url);

        assert_eq!(links.len(), 2);
        assert_eq!(
            links[0].url.as_str(),
            "https://www.rsroc.org.tw/action/detail.php?id=12"
        );
        assert_eq!(links[0].label, "春季研討會");
        assert_eq!(links[1].url.as_str(), "https://other.example/x");
        assert_eq!(links[1].label, "");
    }
}
