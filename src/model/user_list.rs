//! Paginated app user id listing.

// self
use crate::_prelude::*;

/// One page of app user ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
	/// User ids in provider order.
	pub elements: Vec<i64>,
	/// Cursor URL for the previous page; absent on the first page.
	#[serde(default)]
	pub before_url: Option<String>,
	/// Cursor URL for the next page; absent on the last page.
	#[serde(default)]
	pub after_url: Option<String>,
}
impl UserListResponse {
	/// `from_id` to request the next page with, read from `after_url`.
	pub fn next_from_id(&self) -> Option<i64> {
		self.after_url.as_deref().and_then(cursor_from_id)
	}

	/// `from_id` of the previous page, read from `before_url`.
	pub fn previous_from_id(&self) -> Option<i64> {
		self.before_url.as_deref().and_then(cursor_from_id)
	}
}

/// Sort order for the user id listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
	/// Oldest connection first.
	#[default]
	Asc,
	/// Newest connection first.
	Desc,
}
impl Order {
	/// Returns the wire literal.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}
impl Display for Order {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

fn cursor_from_id(cursor: &str) -> Option<i64> {
	let url = Url::parse(cursor).ok()?;

	url.query_pairs().find(|(name, _)| name == "from_id").and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decodes_page_with_one_cursor() {
		let page: UserListResponse =
			serde_json::from_str(r#"{"elements":[3,7],"before_url":null,"after_url":"cursor123"}"#)
				.expect("User list page should decode.");

		assert_eq!(page.elements, vec![3, 7]);
		assert_eq!(page.before_url, None);
		assert_eq!(page.after_url.as_deref(), Some("cursor123"));
		assert_eq!(page.next_from_id(), None, "Opaque cursors carry no from_id.");
	}

	#[test]
	fn preserves_provider_order_and_reads_cursor_ids() {
		let page: UserListResponse = serde_json::from_str(
			r#"{
				"elements": [9, 2, 5],
				"total_count": 3,
				"before_url": "https://kapi.kakao.com/v1/user/ids?limit=3&order=desc&from_id=10",
				"after_url": "https://kapi.kakao.com/v1/user/ids?limit=3&order=desc&from_id=5"
			}"#,
		)
		.expect("User list page should decode.");

		assert_eq!(page.elements, vec![9, 2, 5]);
		assert_eq!(page.next_from_id(), Some(5));
		assert_eq!(page.previous_from_id(), Some(10));
	}

	#[test]
	fn missing_cursors_mean_no_more_pages() {
		let page: UserListResponse =
			serde_json::from_str(r#"{"elements":[]}"#).expect("Empty page should decode.");

		assert!(page.elements.is_empty());
		assert!(page.before_url.is_none());
		assert!(page.after_url.is_none());
		assert_eq!(Order::default(), Order::Asc);
	}
}
