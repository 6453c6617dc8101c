/*
 * src/questions.rs
 * クイズ問題データを管理するモジュール
 */

/// 4択クイズの1問
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    /// 正解 (大文字・小文字まで `options` のどれか1つと完全一致する)
    pub answer: &'static str,
    pub options: [&'static str; 4],
}

impl QuizQuestion {
    /// 選択肢が正解かどうか (大文字小文字を区別した完全一致)
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

/// 問題リスト (出題順)
pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What is the translation of 'Apple'?",
        answer: "りんご",
        options: ["バナナ", "りんご", "オレンジ", "ぶどう"],
    },
    QuizQuestion {
        question: "Which word means '本' in English?",
        answer: "Book",
        options: ["Pen", "Book", "Notebook", "Magazine"],
    },
    // ここだけ小文字の "cat"。選択肢も小文字で揃っている
    QuizQuestion {
        question: "Complete the sentence: 'The ___ is sleeping on the sofa.'",
        answer: "cat",
        options: ["dog", "cat", "bird", "fish"],
    },
    QuizQuestion {
        question: "What's the correct translation of '犬'?",
        answer: "Dog",
        options: ["Cat", "Rabbit", "Dog", "Mouse"],
    },
    QuizQuestion {
        question: "Which animal did we see at the zoo in the example sentence?",
        answer: "Elephant",
        options: ["Lion", "Giraffe", "Elephant", "Monkey"],
    },
];
