//! Test fixtures and factory functions for creating test data.

use flashcard_core::{CharacterInfo, WordGloss, WordInfo};

/// Build a word info from `(character, meaning)` pairs.
pub fn word_info(meaning: &str, pinyin: &str, characters: &[(&str, &str)]) -> WordInfo {
    WordInfo {
        word: WordGloss {
            meaning: meaning.to_string(),
            pinyin: pinyin.to_string(),
        },
        characters: characters
            .iter()
            .map(|(c, m)| CharacterInfo::new(*c, *m))
            .collect(),
    }
}

pub fn nin_hao() -> WordInfo {
    word_info("hello", "nín hǎo", &[("您", "you (polite)"), ("好", "good")])
}

pub fn ta() -> WordInfo {
    word_info("she, her", "tā", &[("她", "she, her")])
}

pub fn ma_ma() -> WordInfo {
    word_info("mom", "māma", &[("妈", "mother"), ("妈", "mother")])
}

/// Character page with the stroke image nested where the real site puts it.
pub fn character_page(src: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Stroke Order</title></head>
<body>
  <div id="top">menu</div>
  <div id="content">
    <div class="row">
      <div class="col">
        <div class="card"><div class="card-body">
          <div>pinyin</div>
          <div>radical</div>
          <div>strokes</div>
          <div class="diagram"><img src="{}" alt="stroke order"></div>
        </div></div>
      </div>
    </div>
  </div>
</body>
</html>"#,
        src
    )
}
