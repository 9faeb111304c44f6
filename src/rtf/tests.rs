//! End-to-end tests for RTF document output.

use super::*;
use crate::common::Error;
use chrono::NaiveDate;

const EMPTY_HEADERS: &str = "\n{\\fonttbl{\\f0 Times New Roman;}}\n{\\colortbl;}\n";

fn doc_with(paragraphs: Vec<Paragraph>) -> Document {
    Document::builder()
        .section(Section::new(paragraphs).unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_minimal_document() {
    let doc = Document::builder().paragraph("Hello").build().unwrap();
    assert_eq!(
        doc.to_rtf_string(),
        format!("{{\\rtf1\\ansi\\deff0{EMPTY_HEADERS}{{Hello\\par}}\n}}")
    );
}

#[test]
fn test_writer_options_in_preamble() {
    let doc = Document::builder()
        .options(WriterOptions {
            default_font: 2,
            default_tab_width: Some(720),
        })
        .paragraph("x")
        .build()
        .unwrap();
    assert!(doc.to_rtf_string().starts_with("{\\rtf1\\ansi\\deff2\\deftab720\n"));
}

#[test]
fn test_sparse_color_table() {
    let headers = Headers::builder()
        .color(Color::new(10, 20, 30).at(2).unwrap())
        .color(Color::BLUE.at(5).unwrap())
        .build();
    assert_eq!(headers.color_slots(), 6);

    let doc = Document::builder()
        .headers(headers)
        .paragraph("x")
        .build()
        .unwrap();
    let rtf = doc.to_rtf_string();
    assert!(rtf.contains(
        "\n{\\colortbl;;\\red10\\green20\\blue30;;;\\red0\\green0\\blue255;}\n"
    ));
}

#[test]
fn test_color_index_zero_is_rejected() {
    assert!(matches!(
        Color::RED.at(0),
        Err(Error::InvalidColorIndex(0))
    ));
    assert!(Color::RED.at(256).is_err());
}

#[test]
fn test_font_and_style_tables() {
    let headers = Headers::builder()
        .font(HeaderFont::new("Times New Roman").family(FontFamily::Roman).at(0).unwrap())
        .font(
            HeaderFont::new(HeaderFont::ARIAL)
                .family(FontFamily::Swiss)
                .pitch(Pitch::Variable)
                .at(1)
                .unwrap(),
        )
        .style(HeaderStyle::NORMAL)
        .style(HeaderStyle::HEADING_1)
        .style(HeaderStyle::NORMAL)
        .build();
    let doc = Document::builder()
        .headers(headers)
        .paragraph("x")
        .build()
        .unwrap();
    let rtf = doc.to_rtf_string();

    assert!(rtf.contains(
        "{\\fonttbl{\\f0\\froman\\fcharset0 Times New Roman;}{\\f1\\fswiss\\fcharset0\\fprq2 Arial;}}"
    ));
    assert!(rtf.contains("\n{\\stylesheet{\\s0 Normal;}{\\s1 Heading 1;}}\n"));
}

#[test]
fn test_table_row_structure() {
    let row = Row::new(["a", "b", "c"]).unwrap();
    let rtf = doc_with(vec![row.into()]).to_rtf_string();

    assert_eq!(rtf.matches("\\cellx").count(), 3);
    assert_eq!(rtf.matches("\\cell\n").count(), 3);
    assert_eq!(rtf.matches("\\row").count(), 1);
    assert_eq!(rtf.matches("\\clcbpat0").count(), 3);

    let last_definition = rtf.rfind("\\cellx3").unwrap();
    let first_terminator = rtf.find("\\cell\n").unwrap();
    assert!(last_definition < first_terminator);
    assert!(!rtf.contains("\\par"));
}

#[test]
fn test_row_cell_modifiers() {
    let row = Row::new([
        Cell::new("left").with_width(-2000).with_background(3),
        Cell::new("right").with_border(BorderSide::Bottom),
    ])
    .unwrap()
    .height(400);
    let out = RtfWriter::render_paragraph(&row.into(), true);
    assert_eq!(
        out,
        "{\\trowd\\trautofit1\\intbl\n\
         \\trrh400\\clftsWidth3\\clwWidth2000\\clcbpat3\\cellx1\n\
         \\trrh400\\clbrdrb\\brdrs\\clcbpat0\\cellx2\n\
         {left}\n\\cell\n\
         {right}\n\\cell\n\
         \\row}\n"
    );
}

#[test]
fn test_inherit_flag_controls_reset() {
    let inherited = RtfWriter::render_paragraph(&Paragraph::p(["x"]), true);
    let reset = RtfWriter::render_paragraph(&Paragraph::pard(["x"]), true);
    assert!(!inherited.contains("\\pard"));
    assert!(reset.starts_with("{\\pard"));
}

#[test]
fn test_sections_are_separated() {
    let doc = Document::builder()
        .paragraph("one")
        .section(
            Section::new(["two"])
                .unwrap()
                .with_format(SectionFormat::Break(SectionBreakType::OddPage)),
        )
        .paragraph("three")
        .build()
        .unwrap();
    let rtf = doc.to_rtf_string();

    assert_eq!(rtf.matches("\\sect\n").count(), 2);
    assert!(rtf.contains("{one\\par}\n\\sect\n\\sbkodd\n{two\\par}\n\\sect\n"));
    assert!(rtf.ends_with("{three\\par}\n}"));
}

#[test]
fn test_header_and_footer() {
    let section = Section::new(["body"])
        .unwrap()
        .with_format(SectionFormat::header("Top"))
        .with_format(SectionFormat::footer(TextRun::from(Field::page_number())));

    let doc = Document::builder().section(section).build().unwrap();
    let rtf = doc.to_rtf_string();
    assert!(rtf.contains("{\\header{Top\\par}\n}"));
    assert!(rtf.contains("{\\footer{{\\field{\\*\\fldinst {PAGE}\n}"));
}

#[test]
fn test_info_group() {
    let created = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(10, 20, 30))
        .unwrap();
    let info = DocumentInfo::new()
        .with_title("A{b}")
        .with_author("Ann")
        .with_creation_time(created)
        .with_pages(3);
    let doc = Document::builder()
        .info(info)
        .paragraph("x")
        .build()
        .unwrap();

    assert!(doc.to_rtf_string().contains(
        "{\\info{\\title A\\{b\\}}{\\author Ann}\
         {\\creatim\\yr2024\\mo5\\dy1\\hr10\\min20\\sec30}{\\nofpages3}}\n"
    ));
}

#[test]
fn test_document_formats_follow_headers() {
    let doc = Document::builder()
        .format(DocFormat::Paper(Paper::A4))
        .format(DocFormat::Landscape)
        .paragraph("x")
        .build()
        .unwrap();
    assert_eq!(
        doc.to_rtf_string(),
        format!(
            "{{\\rtf1\\ansi\\deff0{EMPTY_HEADERS}\\paperw16837\\paperh11905\\landscape\n{{x\\par}}\n}}"
        )
    );
}

#[test]
fn test_hyperlink() {
    let run = TextRun::from(Hyperlink::new("https://example.com/{x}", "site"));
    assert_eq!(
        RtfWriter::render_run(&run),
        "{\\field{\\*\\fldinst{HYPERLINK \"https://example.com/\\{x\\}\"}}{\\fldrslt{\\ul {site}\n}}}"
    );
}

#[test]
fn test_field_shape() {
    let field = Field::new("DATE").with_modifiers(FieldModifiers::DIRTY | FieldModifiers::LOCKED);
    assert_eq!(
        RtfWriter::render_run(&field.into()),
        "{\\field\\flddirty\\fldlock{\\*\\fldinst {DATE}\n}{\\fldrslt }}"
    );

    let rtf = RtfWriter::render_run(&Field::author().into());
    assert!(rtf.contains("{\\fldrslt {Refresh 'F9'}\n}}"));
}

#[test]
fn test_picture_in_paragraph() {
    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let picture = Picture::from_bytes(&png, PictureType::Automatic)
        .unwrap()
        .size(1440, 720);
    let out = RtfWriter::render_paragraph(&Paragraph::p([picture]), true);
    assert_eq!(
        out,
        "{{\\pict\\pngblip\\picwgoal1440\\pichgoal720\n89504e470d0a1a0a}\\par}\n"
    );
}

#[test]
fn test_unknown_picture_signature() {
    assert!(matches!(
        Picture::from_bytes(b"GIF89a....", PictureType::Automatic),
        Err(Error::UnsupportedImageType)
    ));
    assert!(Picture::from_bytes(b"GIF89a....", PictureType::Png).is_ok());
}

#[test]
fn test_nested_formatting_closes_in_order() {
    let run = TextRun::seq([
        TextRun::text("x").italic().bold(),
        TextRun::text(" y"),
    ]);
    assert_eq!(RtfWriter::render_run(&run), "{\\b {\\i x}} y");
}

#[test]
fn test_escaping_in_body_text() {
    let rtf = doc_with(vec![Paragraph::p(["}{\\ \u{e9}\n"])]).to_rtf_string();
    assert!(rtf.contains("{\\}\\{\\\\ \\u233\\'e9\\par\n\\par}\n"));
}

#[test]
fn test_document_as_template() {
    let doc = doc_with(vec![Paragraph::p(["Dear %%NAME%%,"])]);
    let mut template = Template::new(doc.to_rtf_string());
    template.inject("NAME", "{Ann}");
    let rendered = template.render();
    assert!(rendered.contains("{Dear \\{Ann\\},\\par}"));
}
