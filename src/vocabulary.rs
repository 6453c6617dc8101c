/*
 * src/vocabulary.rs
 * 単語カードのデータ
 */

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: &'static str,        // 英単語
    pub translation: &'static str, // 日本語訳
    pub example: &'static str,     // 例文
}

/// 単語リスト (この順番でローテーションする)
pub const VOCABULARY_LIST: &[VocabularyEntry] = &[
    VocabularyEntry {
        word: "Apple",
        translation: "りんご",
        example: "I eat an apple every day.",
    },
    VocabularyEntry {
        word: "Book",
        translation: "本",
        example: "She loves to read books.",
    },
    VocabularyEntry {
        word: "Cat",
        translation: "猫",
        example: "The cat is sleeping on the sofa.",
    },
    VocabularyEntry {
        word: "Dog",
        translation: "犬",
        example: "He takes his dog for a walk every morning.",
    },
    VocabularyEntry {
        word: "Elephant",
        translation: "象",
        example: "We saw a big elephant at the zoo.",
    },
];
