use tracing::debug;

use crate::spec::questionnaire::Questionnaire;

/// The creation-time defaulting pass, separate from `validate` so that
/// checking and mutating stay distinct concerns. Idempotent.
///
/// In order: page widths and navigation numbers, group widths, radio value
/// auto-numbering.
pub fn normalize(q: &mut Questionnaire) {
    let mut navigational_num = 0;

    for (page_idx, page) in q.pages.iter_mut().enumerate() {
        if page.width == 0 {
            page.width = 100;
        }
        if page.no_navigation {
            page.navigational_num = 0;
        } else {
            navigational_num += 1;
            page.navigational_num = navigational_num;
        }

        for (group_idx, group) in page.groups.iter_mut().enumerate() {
            if group.width == 0 {
                group.width = 100;
            }

            for (input_idx, input) in group.inputs.iter_mut().enumerate() {
                for (radio_idx, radio) in input.radios.iter_mut().enumerate() {
                    if radio.val.is_empty() {
                        radio.val = (radio_idx + 1).to_string();
                        debug!(
                            page = page_idx,
                            group = group_idx,
                            input = input_idx,
                            val = %radio.val,
                            "assigned radio value"
                        );
                    }
                }
            }
        }
    }
}
