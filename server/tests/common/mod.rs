// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::sync::Arc;

use server::AppState;
use server::transport::app_router;
use tokio::net::TcpListener;

/// Serve the app on a random local port and return its base URL
pub fn spawn_app(app_state: AppState) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind random port");
            let port = listener.local_addr().unwrap().port();
            let addr = format!("http://127.0.0.1:{port}");
            tx.send(addr).unwrap();
            let app = app_router(Arc::new(app_state));
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().unwrap()
}
