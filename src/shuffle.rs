use crate::models::{PreparedQuestion, QuestionRecord, WorkingSet};
use crate::selector::{select, SelectionParams};
use rand::Rng;

/// In-place Fisher-Yates: walk from the last index down to 1, swapping each
/// element with a uniformly chosen one at or before it.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

pub fn prepare_question<R: Rng + ?Sized>(
    record: &QuestionRecord,
    original_index: usize,
    rng: &mut R,
) -> PreparedQuestion {
    let mut shuffled_variants = record.variants.clone();
    fisher_yates(&mut shuffled_variants, rng);
    PreparedQuestion {
        record: record.clone(),
        original_index,
        shuffled_variants,
    }
}

pub fn prepare<R: Rng + ?Sized>(records: &[QuestionRecord], rng: &mut R) -> Vec<PreparedQuestion> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| prepare_question(record, index, rng))
        .collect()
}

pub fn build_working_set<R: Rng + ?Sized>(
    bank: &[QuestionRecord],
    params: &SelectionParams,
    rng: &mut R,
) -> WorkingSet {
    let selection = select(bank, params);
    WorkingSet {
        prepared_questions: prepare(selection.records, rng),
        index_offset: selection.index_offset,
    }
}
