//! Default community presets.
//!
//! The fixed community table the generator targets. Tone instructions are
//! written for native-level Korean output and are embedded verbatim in the
//! generation prompt.

use super::model::{Community, CommunityCategory};

fn entry(
    id: &str,
    name: &str,
    emoji: &str,
    url: &str,
    category: CommunityCategory,
    tone_prompt: &str,
) -> Community {
    Community {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        url: url.to_string(),
        category,
        tone_prompt: tone_prompt.to_string(),
    }
}

/// Returns the built-in community catalog entries, in display order.
pub fn default_communities() -> Vec<Community> {
    use CommunityCategory::*;

    vec![
        // 커뮤니티 (종합/유머)
        entry(
            "dcinside",
            "디시인사이드",
            "🎮",
            "https://gall.dcinside.com",
            Community,
            "반말과 음슴체(~함, ~임, ~음)를 사용. 정제되지 않은 직설적인 말투. 'ㄹㅇ', 'ㅇㅇ', 'ㄷㄷ' 같은 축약어와 갤러리 은어를 자연스럽게 섞을 것. 제목은 어그로성으로 짧고 자극적으로. 존댓말 절대 금지.",
        ),
        entry(
            "fmkorea",
            "에펨코리아",
            "⚽",
            "https://www.fmkorea.com",
            Community,
            "펨코 특유의 드립과 유머 코드가 섞인 반말체. 짧은 문장 위주, 과장 섞인 리액션('미쳤다', '개꿀'). 정보를 주면서도 낚시 느낌이 나지 않게. 축구/스포츠 비유가 먹히는 곳.",
        ),
        entry(
            "clien",
            "클리앙",
            "💻",
            "https://www.clien.net",
            Community,
            "정중한 존댓말('~습니다', '~네요'). IT 기기와 실사용 경험 공유 문화. 과장 없이 담백하고 구체적인 정보 전달. 광고 느낌이 나면 바로 배척당하므로 실사용 후기 톤을 유지할 것.",
        ),
        entry(
            "theqoo",
            "더쿠",
            "🐥",
            "https://theqoo.net",
            Community,
            "부드러운 음슴체('~함', '~했음')와 짧은 문단. 여초 커뮤니티 감성으로 호들갑스럽지 않게 정보 공유하는 톤. 말줄임표와 'ㅠㅠ', 'ㅋㅋ'를 적당히 사용.",
        ),
        entry(
            "mlbpark",
            "엠엘비파크",
            "⚾",
            "https://mlbpark.donga.com",
            Community,
            "불펜 말투: 짧은 반말 서술체('~다', '~네'). 직설적이고 논쟁적인 분위기. 제목에 핵심을 담고 본문은 간결하게. 야구 용어 비유가 자연스러운 곳.",
        ),
        entry(
            "humoruniv",
            "웃긴대학",
            "😂",
            "http://web.humoruniv.com",
            Community,
            "유머가 최우선. 가벼운 반말체로 웃음 포인트를 먼저 주고 정보는 덤으로 얹는 구성. 과한 설명은 금물.",
        ),
        entry(
            "dogdrip",
            "개드립",
            "🐶",
            "https://www.dogdrip.net",
            Community,
            "드립 중심의 반말체. 제목부터 드립을 치고 본문에서 풀어내는 구조. 진지한 홍보 톤이 보이면 역효과이므로 철저히 유머로 포장할 것.",
        ),
        entry(
            "bobaedream",
            "보배드림",
            "🚗",
            "https://www.bobaedream.co.kr",
            Community,
            "자동차 커뮤니티. 존댓말 기반이지만 직설적인 화법. 차량/운전 경험담 형식이 잘 먹히고, 구체적인 수치와 비용 언급이 신뢰를 줌.",
        ),
        // 소셜 미디어 (SNS)
        entry(
            "instagram",
            "인스타그램",
            "📸",
            "https://www.instagram.com",
            Social,
            "감성적인 짧은 문장과 줄바꿈 위주의 캡션 스타일. 이모지를 적극 활용. 해시태그를 10개 내외로 풍부하게. 링크는 '프로필 링크 참고' 형태로 유도.",
        ),
        entry(
            "twitter",
            "X (트위터)",
            "🐦",
            "https://x.com",
            Social,
            "280자 안에서 위트 있게. 리트윗을 부르는 한 줄 훅 + 링크 구조. 반말과 존댓말 중간의 트위터체. 해시태그는 2~3개만.",
        ),
        entry(
            "facebook",
            "페이스북",
            "👍",
            "https://www.facebook.com",
            Social,
            "중장년층 독자를 고려한 차분한 존댓말. 서사형 문단으로 정보를 풀어내고 마지막에 링크를 자연스럽게 배치. 공유를 부르는 유익함 강조.",
        ),
        entry(
            "threads",
            "스레드",
            "🧵",
            "https://www.threads.net",
            Social,
            "캐주얼한 대화체. 혼잣말하듯 시작해서 팔로워에게 말을 거는 구성. 가볍게 질문을 던져 답글을 유도할 것.",
        ),
        // 블로그/지식공유
        entry(
            "naver_blog",
            "네이버 블로그",
            "📗",
            "https://blog.naver.com",
            Blog,
            "이웃에게 말하듯 친근한 존댓말('~했어요', '~하더라구요'). 경험담 중심의 서술과 소제목 구성. 검색 키워드를 제목과 본문에 자연스럽게 녹일 것.",
        ),
        entry(
            "tistory",
            "티스토리",
            "📝",
            "https://www.tistory.com",
            Blog,
            "깔끔한 정보성 문체. 개조식 정리와 명확한 결론. 검색 유입을 노린 키워드 배치. 담백한 존댓말.",
        ),
        entry(
            "naver_cafe",
            "네이버 카페",
            "☕",
            "https://cafe.naver.com",
            Blog,
            "카페 이웃끼리 정보 나누는 공감형 존댓말. '혹시 저만 몰랐나요?' 같은 공감 유도 화법. 맘카페 감성의 세심한 디테일. 광고티가 나면 강퇴당하므로 순수 후기 톤 필수.",
        ),
        entry(
            "naver_kin",
            "네이버 지식iN",
            "💡",
            "https://kin.naver.com",
            Blog,
            "질문에 답하는 전문가 톤. 정중하고 권위 있는 존댓말로 핵심을 먼저 답하고 근거를 정리. '자세한 내용은 아래 링크에 정리해두었습니다' 형태의 마무리.",
        ),
        // 게임 커뮤니티
        entry(
            "inven",
            "인벤",
            "🕹️",
            "https://www.inven.co.kr",
            Game,
            "게이머 반말체. 게임 용어와 효율/스펙 중심 화법. 공략을 공유하는 뉘앙스로 정보를 제시하고 링크는 '전체 공략' 위치로.",
        ),
        entry(
            "ruliweb",
            "루리웹",
            "👾",
            "https://bbs.ruliweb.com",
            Game,
            "게임/서브컬처 커뮤니티. 반말 서술체에 덕후 감성. 정보의 출처를 따지는 문화이므로 '직접 해봤다' 는 경험 근거를 강조.",
        ),
        entry(
            "arcalive",
            "아카라이브",
            "📺",
            "https://arca.live",
            Game,
            "채널 문화에 맞춘 음슴체. 짧고 건조하게 정보만 던지는 스타일. 장황한 설명이나 존댓말은 어색함.",
        ),
        // 쇼핑/핫딜/재테크
        entry(
            "ppomppu",
            "뽐뿌",
            "🛒",
            "https://www.ppomppu.co.kr",
            Shopping,
            "핫딜 정보체: 가격, 할인율, 구매 조건을 제목에 압축. 본문은 개조식으로 핵심 스펙과 가격 비교. '링크에 상세 비교 있음' 형태로 유도.",
        ),
        entry(
            "quasarzone",
            "퀘이사존",
            "🖥️",
            "https://quasarzone.com",
            Shopping,
            "PC 하드웨어 커뮤니티. 존댓말 기반의 정보 공유 톤. 벤치마크 수치와 가성비 분석이 신뢰를 얻는 핵심. 허세 없는 실측 후기 스타일.",
        ),
        entry(
            "dealbada",
            "딜바다",
            "💸",
            "https://www.dealbada.com",
            Shopping,
            "해외직구/핫딜 커뮤니티. 간결한 존댓말로 딜 정보를 정리. 관세/배송 팁 같은 실용 정보를 곁들이면 반응이 좋음.",
        ),
        // 취미/전문 분야
        entry(
            "cook82",
            "82쿡",
            "🍳",
            "https://www.82cook.com",
            Special,
            "주부 커뮤니티. 공감과 생활 경험 중심의 존댓말('~했어요', '~좋더라고요'). 살림/육아 맥락에 정보를 녹여서 이웃에게 알려주는 따뜻한 톤.",
        ),
        entry(
            "dvdprime",
            "DVD프라임",
            "🎬",
            "https://dvdprime.com",
            Special,
            "영화/AV 기기 커뮤니티. 차분하고 격식 있는 존댓말. 감상평과 기기 리뷰 문화에 맞춰 깊이 있는 디테일을 담을 것.",
        ),
    ]
}
