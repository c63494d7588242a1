//! Pagination shared by every list endpoint.

/// One page of results with the total match count.
///
/// `page` is zero-based here; controllers translate from the one-based query parameter.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        }
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_total_pages_up() {
        let page = Page::<()> {
            items: vec![],
            total: 21,
            page: 0,
            per_page: 10,
        };

        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn zero_page_size_has_no_pages() {
        let page = Page::<()> {
            items: vec![],
            total: 5,
            page: 0,
            per_page: 0,
        };

        assert_eq!(page.total_pages(), 0);
    }
}
