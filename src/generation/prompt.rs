//! Instruction templates sent to the completion API. The model answers in
//! Russian, so the instructions are written in Russian too.

use crate::generation::GenerationMode;

fn title_line(title: Option<&str>) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("Заголовок статьи: {}\n\n", title),
        None => String::new(),
    }
}

/// Renders the template for `mode` with the article embedded verbatim.
pub fn build_prompt(title: Option<&str>, content: &str, mode: GenerationMode) -> String {
    let title_part = title_line(title);

    match mode {
        GenerationMode::Summary => format!(
            "Ты — эксперт по анализу статей. Прочитай следующую статью на английском языке \
и напиши краткое описание на русском языке (2-4 абзаца).

Опиши:
- Основную тему и цель статьи
- Ключевые идеи и выводы автора
- Для кого статья может быть полезна

Сохрани нейтральный тон, не добавляй свои комментарии или оценки.

{title_part}Текст статьи:
{content}"
        ),
        GenerationMode::Thesis => format!(
            "Ты — эксперт по анализу статей. Прочитай следующую статью на английском языке \
и выдели ключевые тезисы на русском языке.

Формат ответа:
- Каждый тезис на отдельной строке
- Начинай каждый тезис с маркера \"•\" или \"-\"
- Тезисы должны быть краткими (1-2 предложения каждый)
- Выдели 5-10 самых важных тезисов
- Сохрани логическую структуру (если есть порядок изложения в статье)

{title_part}Текст статьи:
{content}"
        ),
        GenerationMode::Telegram => format!(
            "Ты — копирайтер, который пишет посты для Telegram-каналов. Прочитай следующую \
статью на английском языке и создай готовый пост для Telegram на русском языке.

Требования к посту:
- Заголовок (первая строка, можно использовать эмодзи для привлечения внимания)
- 2-4 абзаца основного текста
- Используй короткие предложения и абзацы (Telegram лучше читается с переносами строк)
- Добавь хештеги в конце (3-5 релевантных хештегов)
- Тон: информативный, но живой и понятный
- Длина: примерно 500-800 символов (оптимально для Telegram)

Не добавляй ссылки на оригинал, не упоминай источник — только содержание статьи.

{title_part}Текст статьи:
{content}"
        ),
    }
}

/// Fixed instruction for whole-article translation.
pub fn build_translation_prompt(content: &str) -> String {
    format!(
        "Переведи следующий текст статьи на русский язык. Сохрани структуру и абзацы. \
Не добавляй комментарии — только перевод.\n\n{content}"
    )
}
