// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use crate::domain::traits::PageCallback;

/// Hands stored pages to a page callback, one call per page, in order.
///
/// The last page is flagged as such and every earlier page carries a
/// continuation token. Delivery stops as soon as the callback returns `false`.
/// An empty page sequence still yields one empty last page. Returns the
/// number of pages delivered.
pub(crate) fn deliver_pages<T, O>(
    operation: &'static str,
    pages: &[Vec<T>],
    make_page: impl Fn(Vec<T>, Option<String>) -> O,
    on_page: &mut PageCallback<'_, O>,
) -> usize
where
    T: Clone,
{
    if pages.is_empty() {
        on_page(&make_page(Vec::new(), None), true);
        tracing::debug!(operation, delivered = 1, "delivered empty page");
        return 1;
    }

    let total = pages.len();
    let mut delivered = 0;
    for (idx, items) in pages.iter().enumerate() {
        let is_last = idx + 1 == total;
        let next_token = (!is_last).then(|| page_token(idx + 1));
        delivered += 1;
        let keep_going = on_page(&make_page(items.clone(), next_token), is_last);
        if !keep_going && !is_last {
            tracing::debug!(operation, delivered, total, "listing stopped by callback");
            break;
        }
    }
    tracing::debug!(operation, delivered, total, "delivered pages");
    delivered
}

fn page_token(next_page: usize) -> String {
    format!("page-{next_page}")
}
