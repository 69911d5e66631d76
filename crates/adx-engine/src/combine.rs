use crate::models::{Class, ClassDocument};

/// Appends `b` to `a`. No dedup, no reordering.
pub fn combine(mut a: Vec<Class>, b: Vec<Class>) -> Vec<Class> {
    a.extend(b);
    a
}

/// Folds any number of class lists into one, in iteration order.
pub fn combine_all<I>(lists: I) -> Vec<Class>
where
    I: IntoIterator<Item = Vec<Class>>,
{
    lists.into_iter().fold(Vec::new(), combine)
}

/// Appends the classes of previously stored intermediate documents.
pub fn combine_documents<I>(classes: Vec<Class>, documents: I) -> Vec<Class>
where
    I: IntoIterator<Item = ClassDocument>,
{
    documents
        .into_iter()
        .fold(classes, |acc, doc| combine(acc, doc.classes))
}
