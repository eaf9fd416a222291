use crate::models::{LinkPage, QueryParams, SortOrder};

use super::MockLinkGenerator;

/// Builds one page of fabricated records for the admin listing.
///
/// Only the materialized page is sorted, so ordering does not hold across
/// pages. The reported total is a constant.
#[derive(Debug, Clone, Copy)]
pub struct QuerySimulator {
    generator: MockLinkGenerator,
    total: u64,
    max_page_size: u64,
}

impl Default for QuerySimulator {
    fn default() -> Self {
        Self::new(MockLinkGenerator::default(), 50, 20)
    }
}

impl QuerySimulator {
    pub fn new(generator: MockLinkGenerator, total: u64, max_page_size: u64) -> Self {
        Self {
            generator,
            total,
            max_page_size,
        }
    }

    pub fn simulate(&self, params: &QueryParams) -> LinkPage {
        let page = params.effective_page();
        let page_size = params.effective_page_size();
        let count = page_size.min(self.max_page_size);
        // pages past the id space are empty; ids are never repeated
        let Some(offset) = (page - 1).checked_mul(page_size) else {
            return LinkPage {
                total: self.total,
                list: Vec::new(),
            };
        };

        let mut list: Vec<_> = (1..=count)
            .map_while(|n| offset.checked_add(n))
            .map(|id| self.generator.generate(Some(id)))
            .collect();

        if let Some((field, order)) = params.sort_spec() {
            // stable: equal keys keep generation order
            list.sort_by(|a, b| {
                let ord = a.compare_by(b, field);
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        LinkPage {
            total: self.total,
            list,
        }
    }
}
