// Built-in fixture dataset for dummy-data mode.
//
// Timestamps are generated relative to startup so windowed queries always
// find recent records. The flavor mirrors what the collectors produce:
// Jakarta city reports across the five monitored topic areas.

use chrono::{Duration, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::common::Platform;
use crate::domains::engagement::ChatLog;
use crate::domains::insights::{InsightBatch, InsightRecord};
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

pub struct FixtureData {
    pub posts: Vec<Post>,
    pub news: Vec<NewsArticle>,
    pub chat_logs: Vec<ChatLog>,
    pub insight_batches: Vec<InsightBatch>,
}

struct PostSeed {
    username: &'static str,
    caption: &'static str,
    hashtags: &'static [&'static str],
    mentions: &'static [&'static str],
    keywords: &'static [&'static str],
    hours_ago: i64,
    region: &'static str,
    topic: &'static str,
    urgency: i32,
    sentiment: &'static str,
    like_count: i64,
}

const POST_SEEDS: [PostSeed; 10] = [
    PostSeed {
        username: "warga_kemang",
        caption: "Banjir di Kemang sudah selutut, mohon bantuan evakuasi segera!",
        hashtags: &["banjir", "jakartaselatan"],
        mentions: &["@bpbddkijakarta"],
        keywords: &["banjir", "evakuasi"],
        hours_ago: 3,
        region: "Jakarta Selatan",
        topic: "Environment and Disaster",
        urgency: 92,
        sentiment: "Negative",
        like_count: 2140,
    },
    PostSeed {
        username: "commuter_line",
        caption: "Macet total di Sudirman, TransJakarta penuh sejak pagi",
        hashtags: &["macet", "transjakarta"],
        mentions: &["@dishubdkijakarta"],
        keywords: &["macet", "transjakarta"],
        hours_ago: 6,
        region: "Jakarta Pusat",
        topic: "Transportation",
        urgency: 68,
        sentiment: "Negative",
        like_count: 870,
    },
    PostSeed {
        username: "info_cengkareng",
        caption: "Penjambretan lagi di flyover Cengkareng, hati-hati yang pulang malam",
        hashtags: &["keamanan", "jakartabarat"],
        mentions: &["@polres_jakbar"],
        keywords: &["penjambretan", "keamanan"],
        hours_ago: 12,
        region: "Jakarta Barat",
        topic: "Safety and Crime",
        urgency: 84,
        sentiment: "Negative",
        like_count: 1530,
    },
    PostSeed {
        username: "pedagang_tanahabang",
        caption: "Harga cabai di Pasar Tanah Abang naik dua kali lipat minggu ini",
        hashtags: &["harga", "pasar"],
        mentions: &[],
        keywords: &["harga", "cabai", "pasar"],
        hours_ago: 26,
        region: "Jakarta Pusat",
        topic: "Economy",
        urgency: 55,
        sentiment: "Negative",
        like_count: 430,
    },
    PostSeed {
        username: "warga_kelapagading",
        caption: "Antrian di Dukcapil Kelapa Gading cuma 15 menit, pelayanan makin cepat",
        hashtags: &["dukcapil", "pelayananpublik"],
        mentions: &["@dukcapiljakarta"],
        keywords: &["dukcapil", "pelayanan"],
        hours_ago: 30,
        region: "Jakarta Utara",
        topic: "Government and Public Policy",
        urgency: 15,
        sentiment: "Positive",
        like_count: 310,
    },
    PostSeed {
        username: "sepeda_jakarta",
        caption: "Jalur sepeda baru di Rasuna Said mulus banget, terima kasih!",
        hashtags: &["jalursepeda"],
        mentions: &["@dkijakarta"],
        keywords: &["sepeda", "infrastruktur"],
        hours_ago: 50,
        region: "Jakarta Selatan",
        topic: "Transportation",
        urgency: 10,
        sentiment: "Positive",
        like_count: 980,
    },
    PostSeed {
        username: "peduli_ciliwung",
        caption: "Sampah menumpuk lagi di pintu air Manggarai, polusi sungai makin parah",
        hashtags: &["polusi", "ciliwung"],
        mentions: &["@dinaslhdki"],
        keywords: &["sampah", "polusi"],
        hours_ago: 74,
        region: "Jakarta Selatan",
        topic: "Environment and Disaster",
        urgency: 71,
        sentiment: "Negative",
        like_count: 640,
    },
    PostSeed {
        username: "umkm_kuliner",
        caption: "Bazar UMKM di Monas ramai, omzet pedagang naik",
        hashtags: &["umkm", "monas"],
        mentions: &[],
        keywords: &["umkm", "bazar"],
        hours_ago: 100,
        region: "Jakarta Pusat",
        topic: "Economy",
        urgency: 8,
        sentiment: "Positive",
        like_count: 220,
    },
    PostSeed {
        username: "warga_cakung",
        caption: "Lampu jalan di Cakung mati seminggu, rawan kejahatan malam hari",
        hashtags: &["keamanan"],
        mentions: &["@pemprovdki"],
        keywords: &["lampu jalan", "keamanan"],
        hours_ago: 130,
        region: "Jakarta Timur",
        topic: "Safety and Crime",
        urgency: 62,
        sentiment: "Negative",
        like_count: 380,
    },
    PostSeed {
        username: "mrt_fans",
        caption: "MRT fase 2 mulai uji coba, naik dari Bundaran HI makin gampang",
        hashtags: &["mrt", "transportasi"],
        mentions: &[],
        keywords: &["mrt"],
        hours_ago: 160,
        region: "Jakarta Pusat",
        topic: "Transportation",
        urgency: 12,
        sentiment: "Positive",
        like_count: 1250,
    },
];

struct NewsSeed {
    title: &'static str,
    description: &'static str,
    creator: &'static str,
    keywords: &'static [&'static str],
    hours_ago: i64,
    region: &'static str,
    topic: &'static str,
    urgency: i32,
    sentiment: &'static str,
    engagement_rate: f64,
}

const NEWS_SEEDS: [NewsSeed; 8] = [
    NewsSeed {
        title: "Banjir Rendam Tiga Kecamatan di Jakarta Selatan, Ribuan Warga Mengungsi",
        description: "Hujan deras sejak dini hari membuat Kali Krukut meluap.",
        creator: "Kompas",
        keywords: &["banjir", "pengungsi", "bpbd"],
        hours_ago: 4,
        region: "Jakarta Selatan",
        topic: "Environment and Disaster",
        urgency: 95,
        sentiment: "Negative",
        engagement_rate: 88.0,
    },
    NewsSeed {
        title: "Pemprov DKI Tambah Armada TransJakarta di Koridor Padat",
        description: "Penambahan 50 bus untuk mengurai kepadatan jam sibuk.",
        creator: "Detik",
        keywords: &["transjakarta", "pemprov"],
        hours_ago: 10,
        region: "DKI Jakarta",
        topic: "Transportation",
        urgency: 35,
        sentiment: "Positive",
        engagement_rate: 42.0,
    },
    NewsSeed {
        title: "Polres Jakarta Barat Tangkap Komplotan Penjambret Flyover",
        description: "Empat pelaku ditangkap setelah serangkaian laporan warga.",
        creator: "Antara",
        keywords: &["penjambretan", "polres"],
        hours_ago: 20,
        region: "Jakarta Barat",
        topic: "Safety and Crime",
        urgency: 77,
        sentiment: "Neutral",
        engagement_rate: 56.0,
    },
    NewsSeed {
        title: "Harga Cabai Rawit Tembus Rp 120 Ribu per Kilogram",
        description: "Pasokan dari sentra produksi terganggu cuaca ekstrem.",
        creator: "Tempo",
        keywords: &["harga", "cabai", "pasar"],
        hours_ago: 28,
        region: "DKI Jakarta",
        topic: "Economy",
        urgency: 58,
        sentiment: "Negative",
        engagement_rate: 47.0,
    },
    NewsSeed {
        title: "Dukcapil DKI Luncurkan Layanan Adminduk Keliling",
        description: "Layanan jemput bola untuk warga lanjut usia dan disabilitas.",
        creator: "Kompas",
        keywords: &["dukcapil", "layanan publik"],
        hours_ago: 45,
        region: "DKI Jakarta",
        topic: "Government and Public Policy",
        urgency: 12,
        sentiment: "Positive",
        engagement_rate: 25.0,
    },
    NewsSeed {
        title: "Kualitas Udara Jakarta Masuk Kategori Tidak Sehat Tiga Hari Berturut",
        description: "Dinas LH mengimbau warga mengurangi aktivitas luar ruangan.",
        creator: "CNN Indonesia",
        keywords: &["polusi", "udara", "lingkungan"],
        hours_ago: 60,
        region: "DKI Jakarta",
        topic: "Environment and Disaster",
        urgency: 73,
        sentiment: "Negative",
        engagement_rate: 64.0,
    },
    NewsSeed {
        title: "Festival UMKM Jakarta Catat Transaksi Rp 8 Miliar",
        description: "Lebih dari 500 pelaku usaha kecil ikut serta.",
        creator: "Detik",
        keywords: &["umkm", "ekonomi"],
        hours_ago: 110,
        region: "Jakarta Pusat",
        topic: "Economy",
        urgency: 6,
        sentiment: "Positive",
        engagement_rate: 31.0,
    },
    NewsSeed {
        title: "Uji Coba MRT Fase 2 Dimulai Pekan Depan",
        description: "Rute Bundaran HI menuju Harmoni diuji tanpa penumpang.",
        creator: "Antara",
        keywords: &["mrt", "transportasi"],
        hours_ago: 150,
        region: "Jakarta Pusat",
        topic: "Transportation",
        urgency: 18,
        sentiment: "Neutral",
        engagement_rate: 38.0,
    },
];

struct ChatSeed {
    user_id: &'static str,
    username: &'static str,
    message: &'static str,
    response: &'static str,
    response_time_ms: i64,
    hours_ago: i64,
    region: &'static str,
    topic: &'static str,
    urgency: i32,
    sentiment: &'static str,
}

const CHAT_SEEDS: [ChatSeed; 8] = [
    ChatSeed {
        user_id: "u-1001",
        username: "warga_kemang",
        message: "Banjir di Kemang Raya, di mana posko pengungsian terdekat?",
        response: "Posko terdekat ada di SDN Kemang 01. Tim BPBD sudah menuju lokasi.",
        response_time_ms: 1200,
        hours_ago: 2,
        region: "Jakarta Selatan",
        topic: "Environment and Disaster",
        urgency: 90,
        sentiment: "Negative",
    },
    ChatSeed {
        user_id: "u-1002",
        username: "budi_santoso",
        message: "Bagaimana cara memperpanjang KTP yang sudah kedaluwarsa?",
        response: "KTP elektronik berlaku seumur hidup, tidak perlu diperpanjang.",
        response_time_ms: 800,
        hours_ago: 8,
        region: "Jakarta Timur",
        topic: "Government and Public Policy",
        urgency: 10,
        sentiment: "Neutral",
    },
    ChatSeed {
        user_id: "u-1003",
        username: "sinta_dewi",
        message: "Jalan di depan pasar Minggu berlubang besar, sudah ada korban jatuh",
        response: "Laporan diteruskan ke Dinas Bina Marga untuk perbaikan prioritas.",
        response_time_ms: 1500,
        hours_ago: 15,
        region: "Jakarta Selatan",
        topic: "Transportation",
        urgency: 75,
        sentiment: "Negative",
    },
    ChatSeed {
        user_id: "u-1004",
        username: "andi_pratama",
        message: "Terima kasih, laporan lampu jalan kemarin sudah diperbaiki!",
        response: "Sama-sama, terima kasih sudah melapor.",
        response_time_ms: 600,
        hours_ago: 20,
        region: "Jakarta Timur",
        topic: "Government and Public Policy",
        urgency: 5,
        sentiment: "Positive",
    },
    ChatSeed {
        user_id: "u-1001",
        username: "warga_kemang",
        message: "Air mulai surut, apakah bantuan logistik masih disalurkan?",
        response: "Ya, distribusi logistik berlanjut sampai kondisi normal.",
        response_time_ms: 1100,
        hours_ago: 40,
        region: "Jakarta Selatan",
        topic: "Environment and Disaster",
        urgency: 72,
        sentiment: "Neutral",
    },
    ChatSeed {
        user_id: "u-1005",
        username: "rina_wati",
        message: "Ada razia parkir liar di Tanah Abang tidak hari ini?",
        response: "Jadwal penertiban tidak dipublikasikan, mohon parkir di tempat resmi.",
        response_time_ms: 900,
        hours_ago: 70,
        region: "Jakarta Pusat",
        topic: "Transportation",
        urgency: 30,
        sentiment: "Neutral",
    },
    ChatSeed {
        user_id: "u-1006",
        username: "dodi_firmansyah",
        message: "Pencurian motor marak di Cakung, tolong tambah patroli malam",
        response: "Permintaan patroli diteruskan ke Polsek Cakung.",
        response_time_ms: 1300,
        hours_ago: 96,
        region: "Jakarta Timur",
        topic: "Safety and Crime",
        urgency: 78,
        sentiment: "Negative",
    },
    ChatSeed {
        user_id: "u-1007",
        username: "maya_lestari",
        message: "Kapan pendaftaran bantuan UMKM dibuka lagi?",
        response: "Gelombang berikutnya dibuka awal bulan depan melalui JAKI.",
        response_time_ms: 700,
        hours_ago: 120,
        region: "Jakarta Barat",
        topic: "Economy",
        urgency: 25,
        sentiment: "Neutral",
    },
];

impl FixtureData {
    pub fn load() -> Self {
        let now = Utc::now();

        let posts = POST_SEEDS
            .iter()
            .map(|seed| Post {
                id: Uuid::new_v4(),
                username: seed.username.to_string(),
                caption: seed.caption.to_string(),
                hashtags: seed.hashtags.iter().map(|s| s.to_string()).collect(),
                mentions: seed.mentions.iter().map(|s| s.to_string()).collect(),
                keywords: seed.keywords.iter().map(|s| s.to_string()).collect(),
                created_at: now - Duration::hours(seed.hours_ago),
                region: Some(seed.region.to_string()),
                topic: Some(seed.topic.to_string()),
                urgency: seed.urgency,
                sentiment: Some(seed.sentiment.to_string()),
                like_count: seed.like_count,
                link: None,
                thumbnail_url: None,
                post_type: Some("video".to_string()),
            })
            .collect();

        let news = NEWS_SEEDS
            .iter()
            .map(|seed| NewsArticle {
                id: Uuid::new_v4(),
                title: seed.title.to_string(),
                description: Some(seed.description.to_string()),
                content: None,
                creator: Some(seed.creator.to_string()),
                url: None,
                keywords: seed.keywords.iter().map(|s| s.to_string()).collect(),
                created_at: now - Duration::hours(seed.hours_ago),
                region: Some(seed.region.to_string()),
                topic: Some(seed.topic.to_string()),
                urgency: seed.urgency,
                sentiment: Some(seed.sentiment.to_string()),
                engagement_rate: seed.engagement_rate,
            })
            .collect();

        let chat_logs = CHAT_SEEDS
            .iter()
            .map(|seed| ChatLog {
                id: Uuid::new_v4(),
                user_id: seed.user_id.to_string(),
                username: Some(seed.username.to_string()),
                message_text: seed.message.to_string(),
                bot_response: Some(seed.response.to_string()),
                response_time_ms: seed.response_time_ms,
                created_at: now - Duration::hours(seed.hours_ago),
                region: Some(seed.region.to_string()),
                topic: Some(seed.topic.to_string()),
                urgency: seed.urgency,
                sentiment: Some(seed.sentiment.to_string()),
            })
            .collect();

        let today = now.date_naive();
        let insight_batches = vec![
            InsightBatch {
                id: Uuid::new_v4(),
                platform: "Social".to_string(),
                generated_for: today,
                created_at: now,
                insights: Json(vec![
                    InsightRecord {
                        topic: Some("Environment and Disaster".to_string()),
                        main_issue: "Banjir di Jakarta Selatan".to_string(),
                        problem: "Luapan Kali Krukut merendam permukiman di tiga kecamatan."
                            .to_string(),
                        suggestion: "Percepat normalisasi kali dan tambah pompa mobile."
                            .to_string(),
                        urgency_score: 93,
                    },
                    InsightRecord {
                        topic: Some("Safety and Crime".to_string()),
                        main_issue: "Penjambretan di Jakarta Barat".to_string(),
                        problem: "Laporan penjambretan meningkat di sekitar flyover Cengkareng."
                            .to_string(),
                        suggestion: "Tambah patroli malam dan penerangan jalan.".to_string(),
                        urgency_score: 81,
                    },
                    InsightRecord {
                        topic: Some("Transportation".to_string()),
                        main_issue: "Kemacetan koridor Sudirman".to_string(),
                        problem: "Kepadatan TransJakarta melebihi kapasitas pada jam sibuk."
                            .to_string(),
                        suggestion: "Tambah armada pada jam puncak.".to_string(),
                        urgency_score: 64,
                    },
                ]),
            },
            InsightBatch {
                id: Uuid::new_v4(),
                platform: "News".to_string(),
                generated_for: today,
                created_at: now,
                insights: Json(vec![
                    InsightRecord {
                        topic: Some("Environment and Disaster".to_string()),
                        main_issue: "Kualitas udara tidak sehat".to_string(),
                        problem: "Indeks polusi udara berada di kategori tidak sehat tiga hari berturut."
                            .to_string(),
                        suggestion: "Perketat uji emisi dan perluas kawasan rendah emisi."
                            .to_string(),
                        urgency_score: 74,
                    },
                    InsightRecord {
                        topic: Some("Economy".to_string()),
                        main_issue: "Lonjakan harga cabai".to_string(),
                        problem: "Harga cabai rawit naik dua kali lipat dalam sepekan.".to_string(),
                        suggestion: "Gelar operasi pasar dan pantau rantai pasok.".to_string(),
                        urgency_score: 57,
                    },
                ]),
            },
        ];

        FixtureData {
            posts,
            news,
            chat_logs,
            insight_batches,
        }
    }

    pub fn posts_in_range(
        &self,
        from: chrono::DateTime<Utc>,
        to: chrono::DateTime<Utc>,
    ) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.created_at >= from && p.created_at <= to)
            .cloned()
            .collect()
    }

    pub fn news_in_range(
        &self,
        from: chrono::DateTime<Utc>,
        to: chrono::DateTime<Utc>,
    ) -> Vec<NewsArticle> {
        self.news
            .iter()
            .filter(|a| a.created_at >= from && a.created_at <= to)
            .cloned()
            .collect()
    }

    pub fn chat_logs_since(&self, since: chrono::DateTime<Utc>) -> Vec<ChatLog> {
        self.chat_logs
            .iter()
            .filter(|log| log.created_at >= since)
            .cloned()
            .collect()
    }

    pub fn latest_insights(&self, platform: Platform) -> Option<InsightBatch> {
        self.insight_batches
            .iter()
            .filter(|batch| batch.platform == platform.as_str())
            .max_by_key(|batch| batch.generated_for)
            .cloned()
    }
}
