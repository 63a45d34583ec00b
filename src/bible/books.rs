//! Canonical book table.
//!
//! A flat, immutable list of the 66 books in canonical order. Lookups go
//! through alias indexes built once on first use.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// A single book of the Bible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// 1-based position in canonical order.
    pub number: u8,
    /// Key used by the remote verse endpoint (e.g. `john`).
    pub key: &'static str,
    /// English book name.
    pub english_name: &'static str,
    /// Korean names, primary name first.
    pub korean_names: &'static [&'static str],
    /// English abbreviations.
    pub english_abbreviations: &'static [&'static str],
}

impl BookEntry {
    /// Primary Korean name, used when rendering a reference.
    pub fn display_name(&self) -> &'static str {
        self.korean_names.first().copied().unwrap_or(self.english_name)
    }

    /// Whether `alias` is one of this book's Korean names.
    pub fn has_korean_alias(&self, alias: &str) -> bool {
        self.korean_names.contains(&alias)
    }
}

/// All 66 books in canonical order.
pub static BOOKS: [BookEntry; 66] = [
    BookEntry {
        number: 1,
        key: "ge",
        english_name: "Genesis",
        korean_names: &["창세기", "창"],
        english_abbreviations: &["Ge", "Gen"],
    },
    BookEntry {
        number: 2,
        key: "exo",
        english_name: "Exodus",
        korean_names: &["출애굽기", "출"],
        english_abbreviations: &["Ex", "Exo"],
    },
    BookEntry {
        number: 3,
        key: "lev",
        english_name: "Leviticus",
        korean_names: &["레위기", "레"],
        english_abbreviations: &["Le", "Lev"],
    },
    BookEntry {
        number: 4,
        key: "num",
        english_name: "Numbers",
        korean_names: &["민수기", "민"],
        english_abbreviations: &["Nu", "Num"],
    },
    BookEntry {
        number: 5,
        key: "deu",
        english_name: "Deuteronomy",
        korean_names: &["신명기", "신"],
        english_abbreviations: &["Dt", "Deut", "Deu", "De"],
    },
    BookEntry {
        number: 6,
        key: "josh",
        english_name: "Joshua",
        korean_names: &["여호수아", "수"],
        english_abbreviations: &["Js", "Jos", "Josh"],
    },
    BookEntry {
        number: 7,
        key: "jdgs",
        english_name: "Judges",
        korean_names: &["사사기", "삿"],
        english_abbreviations: &["Jg", "Jud", "Jdg", "Ju", "Jdgs", "Judg"],
    },
    BookEntry {
        number: 8,
        key: "ruth",
        english_name: "Ruth",
        korean_names: &["룻기", "룻"],
        english_abbreviations: &["Ru", "Rut"],
    },
    BookEntry {
        number: 9,
        key: "1sm",
        english_name: "1 Samuel",
        korean_names: &["사무엘상", "삼상"],
        english_abbreviations: &["1 Sa", "1 Sam"],
    },
    BookEntry {
        number: 10,
        key: "2sm",
        english_name: "2 Samuel",
        korean_names: &["사무엘하", "삼하"],
        english_abbreviations: &["2 Sa", "2 Sam"],
    },
    BookEntry {
        number: 11,
        key: "1ki",
        english_name: "1 Kings",
        korean_names: &["열왕기상", "왕상"],
        english_abbreviations: &["1 Ki", "1 King", "1 Kin", "1 Kngs"],
    },
    BookEntry {
        number: 12,
        key: "2ki",
        english_name: "2 Kings",
        korean_names: &["열왕기하", "왕하"],
        english_abbreviations: &["2 Ki", "2 King", "2 Kin", "2 Kngs"],
    },
    BookEntry {
        number: 13,
        key: "1chr",
        english_name: "1 Chronicles",
        korean_names: &["역대상", "대상"],
        english_abbreviations: &["1 Ch", "1 Chr", "1 Chron"],
    },
    BookEntry {
        number: 14,
        key: "2chr",
        english_name: "2 Chronicles",
        korean_names: &["역대하", "대하"],
        english_abbreviations: &["2 Ch", "2 Chr", "2 Chron"],
    },
    BookEntry {
        number: 15,
        key: "ezra",
        english_name: "Ezra",
        korean_names: &["에스라", "스"],
        english_abbreviations: &["Ez", "Ezr"],
    },
    BookEntry {
        number: 16,
        key: "neh",
        english_name: "Nehemiah",
        korean_names: &["느헤미야", "느"],
        english_abbreviations: &["Ne", "Neh"],
    },
    BookEntry {
        number: 17,
        key: "est",
        english_name: "Esther",
        korean_names: &["에스더", "에"],
        english_abbreviations: &["Es", "Est", "Esth", "Ester"],
    },
    BookEntry {
        number: 18,
        key: "job",
        english_name: "Job",
        korean_names: &["욥기", "욥"],
        english_abbreviations: &["Jb"],
    },
    BookEntry {
        number: 19,
        key: "psa",
        english_name: "Psalms",
        korean_names: &["시편", "시"],
        english_abbreviations: &["Ps", "Psa", "Pss", "Psalms"],
    },
    BookEntry {
        number: 20,
        key: "prv",
        english_name: "Proverbs",
        korean_names: &["잠언", "잠"],
        english_abbreviations: &["Pr", "Prov", "Pro"],
    },
    BookEntry {
        number: 21,
        key: "eccl",
        english_name: "Ecclesiastes",
        korean_names: &["전도서", "전"],
        english_abbreviations: &["Ec", "Ecc"],
    },
    BookEntry {
        number: 22,
        key: "ssol",
        english_name: "Song of Solomon",
        korean_names: &["아가", "아"],
        english_abbreviations: &["SOS", "Song of Songs", "SongOfSongs"],
    },
    BookEntry {
        number: 23,
        key: "isa",
        english_name: "Isaiah",
        korean_names: &["이사야", "사"],
        english_abbreviations: &["Isa"],
    },
    BookEntry {
        number: 24,
        key: "jer",
        english_name: "Jeremiah",
        korean_names: &["예레미야", "렘"],
        english_abbreviations: &["Je", "Jer"],
    },
    BookEntry {
        number: 25,
        key: "lam",
        english_name: "Lamentations",
        korean_names: &["예레미야애가", "예래미야애가", "애가", "애"],
        english_abbreviations: &["La", "Lam", "Lament"],
    },
    BookEntry {
        number: 26,
        key: "eze",
        english_name: "Ezekiel",
        korean_names: &["에스겔", "겔"],
        english_abbreviations: &["Ek", "Ezek", "Eze"],
    },
    BookEntry {
        number: 27,
        key: "dan",
        english_name: "Daniel",
        korean_names: &["다니엘", "단"],
        english_abbreviations: &["Da", "Dan", "Dl", "Dnl"],
    },
    BookEntry {
        number: 28,
        key: "hos",
        english_name: "Hosea",
        korean_names: &["호세아", "호"],
        english_abbreviations: &["Ho", "Hos"],
    },
    BookEntry {
        number: 29,
        key: "joel",
        english_name: "Joel",
        korean_names: &["요엘", "욜"],
        english_abbreviations: &["Jl", "Joe"],
    },
    BookEntry {
        number: 30,
        key: "amos",
        english_name: "Amos",
        korean_names: &["아모스", "암"],
        english_abbreviations: &["Am", "Amo"],
    },
    BookEntry {
        number: 31,
        key: "obad",
        english_name: "Obadiah",
        korean_names: &["오바댜", "옵"],
        english_abbreviations: &["Ob", "Oba", "Obd", "Odbh"],
    },
    BookEntry {
        number: 32,
        key: "jonah",
        english_name: "Jonah",
        korean_names: &["요나", "욘"],
        english_abbreviations: &["Jh", "Jon", "Jnh"],
    },
    BookEntry {
        number: 33,
        key: "mic",
        english_name: "Micah",
        korean_names: &["미가", "미"],
        english_abbreviations: &["Mi", "Mic"],
    },
    BookEntry {
        number: 34,
        key: "nahum",
        english_name: "Nahum",
        korean_names: &["나훔", "나"],
        english_abbreviations: &["Na", "Nah"],
    },
    BookEntry {
        number: 35,
        key: "hab",
        english_name: "Habakkuk",
        korean_names: &["하박국", "합"],
        english_abbreviations: &["Hb", "Hab", "Hk", "Habk"],
    },
    BookEntry {
        number: 36,
        key: "zep",
        english_name: "Zephaniah",
        korean_names: &["스바냐", "습"],
        english_abbreviations: &["Zp", "Zep", "Zeph", "Ze"],
    },
    BookEntry {
        number: 37,
        key: "hag",
        english_name: "Haggai",
        korean_names: &["학개", "학"],
        english_abbreviations: &["Ha", "Hag", "Hagg"],
    },
    BookEntry {
        number: 38,
        key: "zec",
        english_name: "Zechariah",
        korean_names: &["스가랴", "슥"],
        english_abbreviations: &["Zc", "Zech", "Zec"],
    },
    BookEntry {
        number: 39,
        key: "mal",
        english_name: "Malachi",
        korean_names: &["말라기", "말"],
        english_abbreviations: &["Ml", "Mal", "Mlc"],
    },
    BookEntry {
        number: 40,
        key: "mat",
        english_name: "Matthew",
        korean_names: &["마태복음", "마"],
        english_abbreviations: &["Mt", "Matt", "Mat"],
    },
    BookEntry {
        number: 41,
        key: "mark",
        english_name: "Mark",
        korean_names: &["마가복음", "막"],
        english_abbreviations: &["Mk", "Mrk"],
    },
    BookEntry {
        number: 42,
        key: "luke",
        english_name: "Luke",
        korean_names: &["누가복음", "눅"],
        english_abbreviations: &["Lk", "Luk", "Lu"],
    },
    BookEntry {
        number: 43,
        key: "john",
        english_name: "John",
        korean_names: &["요한복음", "요"],
        english_abbreviations: &["Jn", "Joh", "Jo"],
    },
    BookEntry {
        number: 44,
        key: "acts",
        english_name: "Acts",
        korean_names: &["사도행전", "행"],
        english_abbreviations: &["Ac", "Act"],
    },
    BookEntry {
        number: 45,
        key: "rom",
        english_name: "Romans",
        korean_names: &["로마서", "롬"],
        english_abbreviations: &["Ro", "Rom", "Rmn", "Rmns"],
    },
    BookEntry {
        number: 46,
        key: "1cor",
        english_name: "1 Corinthians",
        korean_names: &["고린도전서", "고전"],
        english_abbreviations: &["1 Co", "1 Cor"],
    },
    BookEntry {
        number: 47,
        key: "2cor",
        english_name: "2 Corinthians",
        korean_names: &["고린도후서", "고후"],
        english_abbreviations: &["2 Co", "2 Cor"],
    },
    BookEntry {
        number: 48,
        key: "gal",
        english_name: "Galatians",
        korean_names: &["갈라디아서", "갈"],
        english_abbreviations: &["Ga", "Gal", "Gltns"],
    },
    BookEntry {
        number: 49,
        key: "eph",
        english_name: "Ephesians",
        korean_names: &["에베소서", "엡"],
        english_abbreviations: &["Ep", "Eph", "Ephn"],
    },
    BookEntry {
        number: 50,
        key: "phi",
        english_name: "Philippians",
        korean_names: &["빌립보서", "빌"],
        english_abbreviations: &["Phi", "Phil"],
    },
    BookEntry {
        number: 51,
        key: "col",
        english_name: "Colossians",
        korean_names: &["골로새서", "골"],
        english_abbreviations: &["Co", "Col", "Colo", "Cln", "Clns"],
    },
    BookEntry {
        number: 52,
        key: "1th",
        english_name: "1 Thessalonians",
        korean_names: &["데살로니가전서", "살전"],
        english_abbreviations: &["1 Th", "1 Thess", "1 Thes"],
    },
    BookEntry {
        number: 53,
        key: "2th",
        english_name: "2 Thessalonians",
        korean_names: &["데살로니가후서", "살후"],
        english_abbreviations: &["2 Th", "2 Thess", "2 Thes"],
    },
    BookEntry {
        number: 54,
        key: "1tim",
        english_name: "1 Timothy",
        korean_names: &["디모데전서", "딤전"],
        english_abbreviations: &["1 Ti", "1 Tim"],
    },
    BookEntry {
        number: 55,
        key: "2tim",
        english_name: "2 Timothy",
        korean_names: &["디모데후서", "딤후"],
        english_abbreviations: &["2 Ti", "2 Tim"],
    },
    BookEntry {
        number: 56,
        key: "titus",
        english_name: "Titus",
        korean_names: &["디도서", "딛"],
        english_abbreviations: &["Ti", "Tit", "Tt", "Ts"],
    },
    BookEntry {
        number: 57,
        key: "phmn",
        english_name: "Philemon",
        korean_names: &["빌레몬서", "빌레몬", "몬"],
        english_abbreviations: &["Pm", "Phile", "Philm"],
    },
    BookEntry {
        number: 58,
        key: "heb",
        english_name: "Hebrews",
        korean_names: &["히브리서", "히"],
        english_abbreviations: &["He", "Heb", "Hw"],
    },
    BookEntry {
        number: 59,
        key: "jas",
        english_name: "James",
        korean_names: &["야고보서", "약"],
        english_abbreviations: &["Jm", "Jam", "Jas", "Ja"],
    },
    BookEntry {
        number: 60,
        key: "1pet",
        english_name: "1 Peter",
        korean_names: &["베드로전서", "벧전"],
        english_abbreviations: &["1 Pe", "1 Pet", "1 P"],
    },
    BookEntry {
        number: 61,
        key: "2pet",
        english_name: "2 Peter",
        korean_names: &["베드로후서", "벧후"],
        english_abbreviations: &["2 Pe", "2 Pet", "2 P"],
    },
    BookEntry {
        number: 62,
        key: "1jn",
        english_name: "1 John",
        korean_names: &["요한1서", "요한일서", "요1"],
        english_abbreviations: &["1 Joh", "1 Jo", "1 Jn", "1 J"],
    },
    BookEntry {
        number: 63,
        key: "2jn",
        english_name: "2 John",
        korean_names: &["요한2서", "요한이서", "요2"],
        english_abbreviations: &["2 Joh", "2 Jo", "2 Jn", "2 J"],
    },
    BookEntry {
        number: 64,
        key: "3jn",
        english_name: "3 John",
        korean_names: &["요한3서", "요한삼서", "요3"],
        english_abbreviations: &["3 Joh", "3 Jo", "3 Jn", "3 J"],
    },
    BookEntry {
        number: 65,
        key: "jude",
        english_name: "Jude",
        korean_names: &["유다서", "유"],
        english_abbreviations: &[],
    },
    BookEntry {
        number: 66,
        key: "rev",
        english_name: "Revelation",
        korean_names: &["요한계시록", "계"],
        english_abbreviations: &["Re", "Rev", "Rvltn"],
    },
];

lazy_static! {
    /// Korean alias -> index into `BOOKS`. First entry wins on collision.
    static ref KOREAN_INDEX: HashMap<&'static str, usize> = {
        let mut m = HashMap::new();
        for (idx, book) in BOOKS.iter().enumerate() {
            for &alias in book.korean_names {
                m.entry(alias).or_insert(idx);
            }
        }
        m
    };

    /// Lowercased, space-free English name or abbreviation -> index into `BOOKS`.
    static ref ENGLISH_INDEX: HashMap<String, usize> = {
        let mut m = HashMap::new();
        for (idx, book) in BOOKS.iter().enumerate() {
            let names = std::iter::once(book.english_name).chain(book.english_abbreviations.iter().copied());
            for name in names {
                m.entry(normalize_english(name)).or_insert(idx);
            }
        }
        m
    };
}

fn normalize_english(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find a book by exact Korean name or abbreviation (`요한복음`, `요`).
pub fn find_by_korean_alias(alias: &str) -> Option<&'static BookEntry> {
    KOREAN_INDEX.get(alias).map(|&idx| &BOOKS[idx])
}

/// Find a book by its endpoint key.
pub fn find_by_key(key: &str) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|book| book.key == key)
}

/// Find a book by English name or abbreviation, ignoring case and spaces.
pub fn find_by_english(name: &str) -> Option<&'static BookEntry> {
    ENGLISH_INDEX.get(&normalize_english(name)).map(|&idx| &BOOKS[idx])
}
