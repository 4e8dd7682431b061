use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::date_taken::to_iso_date;

/// One hosted image found on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub photo_id: String,
    pub detail_page_url: String,
    pub image_url: String,
}

/// Fields read from a single detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDetails {
    pub title: String,
    pub description: String,
    pub date_taken: Option<NaiveDate>,
}

/// A row of output. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(serialize_with = "serialize_iso_date")]
    pub date_taken: Option<NaiveDate>,
}

pub const PHOTO_RECORD_COLUMNS: [&str; 6] =
    ["id", "url", "title", "category", "description", "date_taken"];

impl PhotoRecord {
    /// The id is a fresh v4 uuid, unrelated to the site's photo identifier.
    pub fn new(entry: &ListingEntry, details: PhotoDetails, category: &str) -> Self {
        PhotoRecord {
            id: Uuid::new_v4().to_string(),
            url: entry.image_url.clone(),
            title: details.title,
            category: category.to_string(),
            description: details.description,
            date_taken: details.date_taken,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.url.clone(),
            self.title.clone(),
            self.category.clone(),
            self.description.clone(),
            self.date_taken.as_ref().map(to_iso_date).unwrap_or_default(),
        ]
    }
}

fn serialize_iso_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => s.serialize_str(&to_iso_date(date)),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ListingEntry, PhotoDetails, PhotoRecord, PHOTO_RECORD_COLUMNS};

    fn entry() -> ListingEntry {
        ListingEntry {
            photo_id: "54260070380".to_string(),
            detail_page_url: "https://www.flickr.com/photos/x/54260070380/".to_string(),
            image_url: "https://live.staticflickr.com/65535/54260070380_abc_m.jpg".to_string(),
        }
    }

    #[test]
    fn record_mirrors_listing_image_url_and_category() {
        let details = PhotoDetails {
            title: "Rain".to_string(),
            description: "Wet street".to_string(),
            date_taken: NaiveDate::from_ymd_opt(2021, 6, 5),
        };
        let record = PhotoRecord::new(&entry(), details, "street");

        assert_eq!(record.url, entry().image_url);
        assert_eq!(record.category, "street");
        assert_ne!(record.id, entry().photo_id);
        assert!(uuid::Uuid::parse_str(&record.id).is_ok());
        assert_eq!(record.to_row()[5], "2021-06-05");
        assert_eq!(record.to_row().len(), PHOTO_RECORD_COLUMNS.len());
    }

    #[test]
    fn ids_are_unique_for_same_photo() {
        let a = PhotoRecord::new(&entry(), PhotoDetails::default(), "street");
        let b = PhotoRecord::new(&entry(), PhotoDetails::default(), "street");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_date_is_empty_cell_and_json_null() {
        let record = PhotoRecord::new(&entry(), PhotoDetails::default(), "street");

        assert_eq!(record.to_row()[5], "");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["date_taken"].is_null());
    }
}
