//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let names = request_span_name(
            "PUT",
            "/products/0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b/discounts/0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5c",
        );

        assert_eq!(names.otel_path, "/products/{uuid}/discounts/{uuid}");
        assert_eq!(names.otel_span_name, "PUT /products/{uuid}/discounts/{uuid}");
    }

    #[test]
    fn root_and_static_paths_are_unchanged() {
        assert_eq!(request_span_name("GET", "/").otel_path, "/");
        assert_eq!(request_span_name("GET", "/cart").otel_path, "/cart");
    }
}
